pub mod stemmer_tests;

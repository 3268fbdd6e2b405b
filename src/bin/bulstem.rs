use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use bulstem::{RuleContext, RuleEncoding, Stemmer, StemmerConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bulstem", about = "Inflectional stemmer for Bulgarian")]
struct Args {
    /// Rule file with lines of the form `suffix ==> replacement frequency`
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Compiled rule set written earlier with --save-compiled
    #[arg(long, conflicts_with = "rules")]
    compiled: Option<PathBuf>,

    /// Directory holding the published `stem_rules_context_N_utf8.txt` rule sets
    #[arg(long, conflicts_with_all = ["rules", "compiled"])]
    rules_dir: Option<PathBuf>,

    /// Which published rule set to load from --rules-dir (1, 2 or 3)
    #[arg(long, default_value_t = 2, requires = "rules_dir")]
    context: usize,

    /// YAML stemmer configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore rules seen fewer times than this
    #[arg(long)]
    min_frequency: Option<u64>,

    /// Leave tokens of at most this many characters unstemmed
    #[arg(long)]
    left_context: Option<usize>,

    /// Let later rules overwrite earlier ones with the same suffix
    #[arg(long, default_value_t = false)]
    allow_duplicates: bool,

    /// Rule file encoding (utf-8 or windows-1251)
    #[arg(long)]
    encoding: Option<RuleEncoding>,

    /// Write the compiled rule set to this path
    #[arg(long)]
    save_compiled: Option<PathBuf>,

    /// Words to stem; stdin is read when none are given
    words: Vec<String>,
}

fn load_config(args: &Args) -> anyhow::Result<StemmerConfig> {
    let mut config = match &args.config {
        Some(path) => StemmerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StemmerConfig::default(),
    };
    if let Some(dir) = &args.rules_dir {
        let context = match RuleContext::from_length(args.context) {
            Some(context) => context,
            None => bail!("--context must be 1, 2 or 3, got {}", args.context),
        };
        config.rules_path = Some(dir.join(context.file_name()));
        config.left_context_length = context.left_context_length();
    }
    if let Some(min_frequency) = args.min_frequency {
        config.min_frequency = min_frequency;
    }
    if let Some(left_context) = args.left_context {
        config.left_context_length = left_context;
    }
    if args.allow_duplicates {
        config.allow_duplicates = true;
    }
    if let Some(encoding) = args.encoding {
        config.encoding = encoding;
    }
    if let Some(rules) = &args.rules {
        config.rules_path = Some(rules.clone());
    }
    Ok(config)
}

fn build_stemmer(args: &Args) -> anyhow::Result<Stemmer> {
    if let Some(path) = &args.compiled {
        return Stemmer::load_from_file(path)
            .with_context(|| format!("loading compiled rule set {}", path.display()));
    }

    let config = load_config(args)?;
    if config.rules_path.is_none() {
        bail!("no rule source given: pass --rules, --rules-dir, --compiled or a config with rules_path");
    }
    Ok(Stemmer::from_config(&config)?)
}

fn stem_line(stemmer: &Stemmer, line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut word_start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), word_start) {
            (true, Some(start)) => {
                out.push_str(&stemmer.stem(&line[start..i]));
                out.push(c);
                word_start = None;
            }
            (true, None) => out.push(c),
            (false, None) => word_start = Some(i),
            (false, Some(_)) => {}
        }
    }
    if let Some(start) = word_start {
        out.push_str(&stemmer.stem(&line[start..]));
    }
    out
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let stemmer = build_stemmer(&args)?;
    tracing::info!(
        suffixes = stemmer.rules().len(),
        min_frequency = stemmer.min_frequency(),
        left_context = stemmer.left_context_length(),
        allow_duplicates = stemmer.rules().allows_duplicates(),
        "stemmer ready"
    );

    if let Some(path) = &args.save_compiled {
        stemmer
            .save_to_file(path)
            .with_context(|| format!("saving compiled rule set {}", path.display()))?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !args.words.is_empty() {
        for word in &args.words {
            writeln!(out, "{}", stemmer.stem(word))?;
        }
        out.flush()?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        writeln!(out, "{}", stem_line(&stemmer, &line))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bulstem").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn rules_dir_selects_published_rule_set() {
        let config = load_config(&parse(&["--rules-dir", "rules", "--context", "3"])).unwrap();
        assert_eq!(
            config.rules_path,
            Some(PathBuf::from("rules").join("stem_rules_context_3_utf8.txt"))
        );
        assert_eq!(config.left_context_length, 3);

        let config = load_config(&parse(&["--rules-dir", "rules", "--left-context", "1"])).unwrap();
        assert_eq!(
            config.rules_path,
            Some(PathBuf::from("rules").join("stem_rules_context_2_utf8.txt"))
        );
        assert_eq!(config.left_context_length, 1);
    }

    #[test]
    fn rules_dir_rejects_unknown_context() {
        assert!(load_config(&parse(&["--rules-dir", "rules", "--context", "4"])).is_err());
    }

    #[test]
    fn context_requires_rules_dir() {
        assert!(Args::try_parse_from(["bulstem", "--context", "1"]).is_err());
    }

    #[test]
    fn stem_line_keeps_whitespace() {
        let stemmer = Stemmer::new([bulstem::Rule::new("ой", "о", 10)], 0, 0, false).unwrap();
        assert_eq!(stem_line(&stemmer, "  порой\tПОРОЙ  "), "  поро\tпоро  ");
        assert_eq!(stem_line(&stemmer, ""), "");
    }
}

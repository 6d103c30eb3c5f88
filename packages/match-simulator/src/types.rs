use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Summary table on stdout
    Text,
    /// One JSON object per match, then a JSON summary line
    Jsonl,
}

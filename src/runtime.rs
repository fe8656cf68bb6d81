use std::env;

use crate::decode::{decode_analyzed_words, decode_dump_words, decode_wakati, decode_yomi};
use crate::error::{MeCabError, Result};
use crate::runner::{run_analyzer, OutputMode};
use crate::types::{AnalyzedWord, DumpWord, MeCabConfig};

/// Handle to a configured MeCab command line.
///
/// The handle holds no process: every operation spawns one fresh `mecab`
/// child, writes the text to its stdin, waits for exit and decodes the
/// captured output. Calls are independent, so a `MeCab` can be shared freely
/// across threads; concurrent calls each run their own child process.
#[derive(Debug, Clone)]
pub struct MeCab {
    cmd: Vec<String>,
    config: MeCabConfig,
}

impl MeCab {
    /// Creates a handle from the analyzer executable found in the
    /// environment: `$MECAB_PATH` when set, otherwise `mecab` on `PATH`.
    pub fn init() -> Result<Self> {
        let program = env::var("MECAB_PATH").unwrap_or_else(|_| "mecab".to_string());
        Self::new([program])
    }

    /// Creates a handle from an explicit command vector (the executable path
    /// followed by any fixed arguments, e.g. a dictionary selection).
    pub fn new(cmd: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        Self::from_config(cmd, MeCabConfig::default())
    }

    /// Creates a handle with explicit execution options.
    pub fn from_config(
        cmd: impl IntoIterator<Item = impl Into<String>>,
        config: MeCabConfig,
    ) -> Result<Self> {
        let cmd: Vec<String> = cmd.into_iter().map(Into::into).collect();
        if cmd.is_empty() {
            return Err(MeCabError::InvalidArgument(
                "command vector must contain the executable".to_string(),
            ));
        }
        Ok(Self { cmd, config })
    }

    /// Returns the configured command vector.
    pub fn cmd(&self) -> &[String] {
        &self.cmd
    }

    /// Returns the configured execution options.
    pub fn config(&self) -> &MeCabConfig {
        &self.config
    }

    /// Morphologically analyzes `text`, one [`AnalyzedWord`] per token in
    /// left-to-right text order.
    pub fn parse(&self, text: &str) -> Result<Vec<AnalyzedWord>> {
        let raw = self.run(OutputMode::Plain, text)?;
        decode_analyzed_words(&raw)
    }

    /// Returns every lattice node the analyzer considered for `text`,
    /// including nodes off the optimal path.
    pub fn dump(&self, text: &str) -> Result<Vec<DumpWord>> {
        let raw = self.run(OutputMode::Dump, text)?;
        decode_dump_words(&raw)
    }

    /// Analyzes `text` in ChaSen-compatible output format. With
    /// `include_spaces` the analyzer keeps half-width spaces as tokens
    /// (`-Ochasen2`) instead of ignoring them (`-Ochasen`).
    pub fn chasen(&self, text: &str, include_spaces: bool) -> Result<Vec<AnalyzedWord>> {
        let mode = if include_spaces {
            OutputMode::ChasenWithSpaces
        } else {
            OutputMode::Chasen
        };
        let raw = self.run(mode, text)?;
        decode_analyzed_words(&raw)
    }

    /// Analyzes `text` emitting only surfaces and part-of-speech tags.
    pub fn simple(&self, text: &str) -> Result<Vec<AnalyzedWord>> {
        let raw = self.run(OutputMode::Simple, text)?;
        decode_analyzed_words(&raw)
    }

    /// Word-separates `text`: the surfaces in order, nothing else.
    pub fn wakati(&self, text: &str) -> Result<Vec<String>> {
        let raw = self.run(OutputMode::Wakati, text)?;
        Ok(decode_wakati(&raw))
    }

    /// Returns the phonetic reading of `text` as a single string.
    pub fn yomi(&self, text: &str) -> Result<String> {
        let raw = self.run(OutputMode::Yomi, text)?;
        Ok(decode_yomi(&raw))
    }

    fn run(&self, mode: OutputMode, text: &str) -> Result<String> {
        run_analyzer(&self.cmd, &self.config, mode, text)
    }
}

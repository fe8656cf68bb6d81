use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Execution options for the spawned `mecab` process.
///
/// Both settings are optional. When unset, the child inherits the caller's
/// working directory and environment unchanged.
#[derive(Debug, Clone, Default)]
pub struct MeCabConfig {
    /// Working directory the child process is started in.
    pub working_dir: Option<PathBuf>,
    /// Environment variables applied on top of the inherited environment.
    pub env: BTreeMap<String, String>,
}

impl MeCabConfig {
    /// Sets the working directory for the spawned process.
    pub fn with_working_dir(mut self, working_dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(working_dir.as_ref().to_path_buf());
        self
    }

    /// Adds one environment variable override.
    ///
    /// Overrides are additive: the child still inherits the caller's
    /// environment, with these entries layered on top.
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Adds several environment variable overrides at once.
    pub fn with_env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            self.env.insert(key.into(), value.into());
        }
        self
    }
}

/// One morphological unit decoded from analyzer output.
///
/// Field order follows the analyzer's comma-separated feature list. The
/// analyzer emits the `*` placeholder for tags that do not apply; those are
/// kept verbatim. `reading` and `pronunciation` are `None` when the analyzer
/// emitted no such field at all (unknown words), which is distinct from a
/// present-but-placeholder `Some("*")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedWord {
    /// Original text span the token covers.
    pub surface: String,
    /// Primary part-of-speech tag, or a free-form feature string.
    pub feature: String,
    /// Secondary part-of-speech classification tags.
    pub feature_details: [String; 3],
    /// Conjugation type and conjugation form tags.
    pub conjugation_forms: [String; 2],
    /// Dictionary base form.
    pub original_form: String,
    /// Phonetic reading, absent for unknown words.
    pub reading: Option<String>,
    /// Pronunciation, absent for unknown words.
    pub pronunciation: Option<String>,
}

/// One lattice node from `-Odump` output.
///
/// Dump mode exposes every node of the analyzer's search graph, including
/// candidates that are not on the optimal path; check [`DumpWord::is_best`].
/// Score fields decode the `*` placeholder to `f64::NAN`, and `cost` keeps
/// the placeholder distinction as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpWord {
    /// Sequence position of the node in the lattice.
    pub node_id: u32,
    /// Morphological fields shared with the plain output format.
    pub word: AnalyzedWord,
    /// Byte offset of the surface span's start in the UTF-8 input.
    pub character_start_byte: usize,
    /// Byte offset one past the surface span's end in the UTF-8 input.
    pub character_end_byte: usize,
    /// Right connection attribute of the grammar.
    pub rc_attr: u16,
    /// Left connection attribute of the grammar.
    pub lc_attr: u16,
    /// Numeric part-of-speech identifier.
    pub pos_id: u16,
    /// Character-class code of the surface.
    pub character_type: u8,
    /// Node status code (normal, unknown, begin/end sentinel).
    pub status: u8,
    /// Whether the node lies on the optimal path through the lattice.
    pub is_best: bool,
    /// Forward lattice score.
    pub alpha: f64,
    /// Backward lattice score.
    pub beta: f64,
    /// Posterior probability of the node.
    pub prob: f64,
    /// Cumulative path cost, `None` when the analyzer emitted a placeholder.
    pub cost: Option<i64>,
}

use std::fmt;
use std::path::Path;

use crate::artifact::ArtifactPaths;

/// One element of an external command line
///
/// Flags are spelled exactly as the DGE script expects them: a single leading hyphen, camel case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `-flag value`
    Opt { flag: &'static str, value: String },
    /// bare `-flag`
    Switch(&'static str),
}

/// A rendered invocation of the DGE script, not yet executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DgeCommand {
    program: String,
    tokens: Vec<Token>,
}

impl DgeCommand {
    /// Flag order is fixed, the script's argument parser depends on it
    pub fn new(script: &str, paths: &ArtifactPaths, out_dir: &str, run_mps: bool) -> Self {
        let mut tokens = vec![
            Token::Opt { flag: "-infile", value: path_arg(&paths.counts) },
            Token::Opt { flag: "-designFile", value: path_arg(&paths.design) },
            Token::Opt { flag: "-contrastFile", value: path_arg(&paths.contrast) },
            Token::Opt { flag: "-sampleGroups", value: path_arg(&paths.sample_group) },
            Token::Opt { flag: "-groupLevels", value: path_arg(&paths.sample_group_levels) },
            Token::Opt { flag: "-featureAnnotationFile", value: path_arg(&paths.feature_anno) },
            Token::Opt { flag: "-phenoData", value: path_arg(&paths.sample_anno) },
            Token::Opt { flag: "-outdir", value: out_dir.to_string() },
            Token::Opt { flag: "-log", value: format!("{}.log", strip_trailing_slash(out_dir)) },
            Token::Switch("-writedb"),
        ];
        if run_mps {
            tokens.push(Token::Switch("-mps"));
        }
        DgeCommand { program: script.to_string(), tokens }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Arguments after the program name, flattened for process execution
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.tokens.len() * 2);
        for token in &self.tokens {
            match token {
                Token::Opt { flag, value } => {
                    args.push(flag.to_string());
                    args.push(value.clone());
                }
                Token::Switch(flag) => args.push(flag.to_string()),
            }
        }
        args
    }

    /// Program and arguments as a single space-separated line
    pub fn render(&self) -> String {
        join(std::iter::once(self.program.clone()).chain(self.args()))
    }
}

impl fmt::Display for DgeCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// The one place command words are glued together
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
    words.join(" ")
}

/// Strip a single trailing `/`
pub fn strip_trailing_slash(dir: &str) -> &str {
    dir.strip_suffix('/').unwrap_or(dir)
}

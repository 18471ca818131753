use std::collections::BTreeMap;

use super::DirectiveError;

/// Whether an option must carry a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    /// The option value may be empty.
    Unchanged,
    /// The option value must not be empty.
    UnchangedRequired,
}

/// Declared option of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub value: OptionValue,
    /// Invocations lacking this option are rejected.
    pub required: bool,
}

/// Static shape of a directive: arguments, options, and whether it accepts a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveSpec {
    pub name: &'static str,
    pub required_arguments: usize,
    pub optional_arguments: usize,
    pub options: &'static [OptionSpec],
    pub has_content: bool,
}

impl DirectiveSpec {
    fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    /// Check an invocation against the declared arguments, options and content rules.
    pub fn validate(&self, invocation: &DirectiveInvocation) -> Result<(), DirectiveError> {
        let supplied = invocation.arguments.len();
        let maximum = self.required_arguments + self.optional_arguments;
        if supplied < self.required_arguments || supplied > maximum {
            return Err(DirectiveError::InvalidArguments {
                minimum: self.required_arguments,
                maximum,
                supplied,
            });
        }

        for (name, value) in &invocation.options {
            let spec = self
                .option(name)
                .ok_or_else(|| DirectiveError::UnknownOption {
                    option: name.clone(),
                })?;
            if spec.value == OptionValue::UnchangedRequired && value.is_empty() {
                return Err(DirectiveError::MissingOptionValue {
                    option: spec.name,
                });
            }
        }

        if let Some(missing) = self
            .options
            .iter()
            .find(|spec| spec.required && !invocation.options.contains_key(spec.name))
        {
            return Err(DirectiveError::MissingOption {
                option: missing.name,
            });
        }

        if !self.has_content {
            if let Some(line) = invocation.content.first() {
                return Err(DirectiveError::UnexpectedContent { line: line.clone() });
            }
        }

        Ok(())
    }
}

/// A directive call site: positional arguments, `:name: value` options and body lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveInvocation {
    pub arguments: Vec<String>,
    pub options: BTreeMap<String, String>,
    pub content: Vec<String>,
}

impl DirectiveInvocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        let argument = argument.into();
        self.arguments.push(argument.trim().to_string());
        self
    }

    /// Set an option. The value is trimmed like a `:name: value` body line.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        self.options.insert(name.into(), value.trim().to_string());
        self
    }

    /// Parse whitespace-separated arguments and a body made of option lines.
    ///
    /// Lines shaped like `:name: value` become options; other non-blank lines
    /// are kept as content. Options must come before any content line.
    pub fn parse(arguments: &str, body: &str) -> Result<Self, DirectiveError> {
        let mut invocation = Self {
            arguments: arguments.split_whitespace().map(str::to_string).collect(),
            ..Self::default()
        };

        for line in body.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match parse_option_line(trimmed) {
                Some((name, value)) if invocation.content.is_empty() => {
                    if invocation.options.contains_key(name) {
                        return Err(DirectiveError::DuplicateOption {
                            option: name.to_string(),
                        });
                    }
                    invocation
                        .options
                        .insert(name.to_string(), value.to_string());
                }
                _ => invocation.content.push(line.to_string()),
            }
        }

        Ok(invocation)
    }

    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

fn parse_option_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(':')?;
    let (name, value) = rest.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, value.trim()))
}

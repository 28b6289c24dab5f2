//! Class-name composition

use smallvec::SmallVec;
use std::fmt;

/// Builds a `class` attribute from conditional parts.
///
/// Empty parts are dropped and surrounding whitespace is trimmed; order is
/// preserved and duplicates are kept, so callers control precedence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassNames {
    classes: SmallVec<[String; 8]>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn add_if(self, class: impl AsRef<str>, condition: bool) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    pub fn add_opt(self, class: Option<impl AsRef<str>>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

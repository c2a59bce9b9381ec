use std::fmt;
use std::str::FromStr;

/// How the declared module name is learned from the compiler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameSource {
    /// `-f name`: the module name as the first token.
    #[default]
    Name,
    /// `-f tree`: the second token of the tree summary (`module: <name>`).
    Tree,
}

impl NameSource {
    pub fn format(&self) -> &'static str {
        match self {
            NameSource::Name => "name",
            NameSource::Tree => "tree",
        }
    }
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format())
    }
}

impl FromStr for NameSource {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(NameSource::Name),
            "tree" => Ok(NameSource::Tree),
            _ => Err(format!("expected 'name' or 'tree', got '{value}'")),
        }
    }
}

pub fn module_name_from_name_output(output: &str) -> Option<String> {
    let token = output.split_whitespace().next()?;
    let name = token.split_once('@').map_or(token, |(name, _revision)| name);
    (!name.is_empty()).then(|| name.to_string())
}

pub fn module_name_from_tree_output(output: &str) -> Option<String> {
    output.split_whitespace().nth(1).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE_OUTPUT: &str = "module: gluon-port
  +--rw port
     +--rw id?     string
     +--rw mtu?    int32
";

    #[test]
    fn tree_output_second_token() {
        assert_eq!(
            module_name_from_tree_output(TREE_OUTPUT).as_deref(),
            Some("gluon-port")
        );
    }

    #[test]
    fn tree_output_too_short() {
        assert_eq!(module_name_from_tree_output("module:"), None);
        assert_eq!(module_name_from_tree_output(""), None);
    }

    #[test]
    fn tree_heuristic_is_positional() {
        // A submodule summary names its parent in second position.
        assert_eq!(
            module_name_from_tree_output("submodule: gluon-sub (belongs-to gluon)\n").as_deref(),
            Some("gluon-sub")
        );
        assert_eq!(
            module_name_from_tree_output("warning: something\nmodule: a\n").as_deref(),
            Some("something")
        );
    }

    #[test]
    fn name_output_strips_revision() {
        assert_eq!(
            module_name_from_name_output("gluon-port@2016-03-04\n").as_deref(),
            Some("gluon-port")
        );
        assert_eq!(
            module_name_from_name_output("gluon-port\n").as_deref(),
            Some("gluon-port")
        );
        assert_eq!(module_name_from_name_output("\n"), None);
    }

    #[test]
    fn parse_name_source() {
        assert_eq!("tree".parse::<NameSource>(), Ok(NameSource::Tree));
        assert_eq!("name".parse::<NameSource>(), Ok(NameSource::Name));
        assert!("yin".parse::<NameSource>().is_err());
        assert_eq!(NameSource::default(), NameSource::Name);
    }
}

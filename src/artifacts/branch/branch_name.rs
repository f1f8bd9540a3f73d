use crate::artifacts::branch::{HEAD_REF_NAME, INVALID_BRANCH_NAME_REGEX, REF_PREFIX};
use crate::errors::Error;
use anyhow::Context;
use derive_new::new;

/// Path of a ref relative to the metadata directory, e.g. `refs/heads/master`
/// or `HEAD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn head() -> Self {
        Self(HEAD_REF_NAME.to_string())
    }

    pub fn is_detached_head(&self) -> bool {
        self.0 == HEAD_REF_NAME
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SymRefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() || name == HEAD_REF_NAME {
            return Err(Error::InvalidBranchName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(Error::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }

    /// Branch named by a `refs/heads/...` symbolic ref; `None` for HEAD itself
    pub fn try_parse_sym_ref_name(sym_ref_name: &SymRefName) -> anyhow::Result<Option<Self>> {
        if sym_ref_name.is_detached_head() {
            return Ok(None);
        }

        let name = sym_ref_name
            .as_ref_path()
            .strip_prefix(REF_PREFIX)
            .with_context(|| {
                format!(
                    "symbolic ref name must start with '{}', got '{}'",
                    REF_PREFIX,
                    sym_ref_name.as_ref_path()
                )
            })?;

        Self::try_parse(name.to_string()).map(Some)
    }

    pub fn to_sym_ref_name(&self) -> SymRefName {
        SymRefName::new(format!("{REF_PREFIX}{}", self.0))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

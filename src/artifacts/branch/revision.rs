use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{HEAD_REF_NAME, REF_ALIASES};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::{MIN_OBJECT_ID_PREFIX, OBJECT_ID_LENGTH};
use crate::errors::Error;

/// A user-supplied name for a commit
///
/// Supports:
/// - `HEAD` and its alias `@`
/// - Branch names: `master`, `feature/login`
/// - Full object IDs (40 hex characters)
/// - Abbreviated object IDs (4 to 39 hex characters), unique among commits
///
/// Branch names win over object IDs when a name could be both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    Named(String),
}

/// What a revision resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionTarget {
    /// A branch and its tip
    Branch { name: BranchName, oid: ObjectId },
    /// A bare commit (checking it out detaches HEAD)
    Commit(ObjectId),
}

impl RevisionTarget {
    pub fn oid(&self) -> &ObjectId {
        match self {
            RevisionTarget::Branch { oid, .. } | RevisionTarget::Commit(oid) => oid,
        }
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            RevisionTarget::Branch { name, .. } => Some(name),
            RevisionTarget::Commit(_) => None,
        }
    }
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);

        if resolved_name.is_empty() {
            return Err(Error::invalid_target(revision).into());
        }

        if resolved_name == HEAD_REF_NAME {
            Ok(Revision::Head)
        } else {
            Ok(Revision::Named(resolved_name.to_string()))
        }
    }

    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        Ok(self.resolve_target(repository)?.oid().clone())
    }

    /// Resolve to a branch or a commit
    ///
    /// Fails with `NoCommitsYet` for a branch without commits, with
    /// `AmbiguousObjectId` for a prefix shared by several commits and with
    /// `InvalidTarget` when nothing matches.
    pub fn resolve_target(&self, repository: &Repository) -> anyhow::Result<RevisionTarget> {
        match self {
            Revision::Head => {
                let oid = repository.refs().read_head()?.ok_or(Error::NoCommitsYet)?;
                match repository.refs().current_branch()? {
                    Some(name) => Ok(RevisionTarget::Branch { name, oid }),
                    None => Ok(RevisionTarget::Commit(oid)),
                }
            }
            Revision::Named(name) => {
                if let Ok(branch_name) = BranchName::try_parse(name.clone())
                    && repository.refs().branch_exists(&branch_name)
                {
                    let oid = repository
                        .refs()
                        .read_branch(&branch_name)?
                        .ok_or(Error::NoCommitsYet)?;
                    return Ok(RevisionTarget::Branch {
                        name: branch_name,
                        oid,
                    });
                }

                if Self::looks_like_oid(name) {
                    return Self::resolve_oid(name, repository).map(RevisionTarget::Commit);
                }

                Err(Error::invalid_target(name).into())
            }
        }
    }

    fn resolve_oid(oid_str: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        if oid_str.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(oid_str.to_string())?;
            if !Self::is_commit(&oid, repository) {
                return Err(Error::invalid_target(oid_str).into());
            }
            return Ok(oid);
        }

        let commit_matches = repository
            .database()
            .find_objects_by_prefix(oid_str)?
            .into_iter()
            .filter(|oid| Self::is_commit(oid, repository))
            .collect::<Vec<_>>();

        match commit_matches.as_slice() {
            [] => Err(Error::invalid_target(oid_str).into()),
            [oid] => Ok(oid.clone()),
            _ => Err(Error::AmbiguousObjectId {
                prefix: oid_str.to_string(),
                candidates: commit_matches,
            }
            .into()),
        }
    }

    fn is_commit(oid: &ObjectId, repository: &Repository) -> bool {
        repository
            .database()
            .get_object_type(oid)
            .map(|object_type| object_type == ObjectType::Commit)
            .unwrap_or(false)
    }

    fn looks_like_oid(s: &str) -> bool {
        s.len() >= MIN_OBJECT_ID_PREFIX && ObjectId::is_hex_prefix(s)
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Head => write!(f, "{HEAD_REF_NAME}"),
            Revision::Named(name) => write!(f, "{name}"),
        }
    }
}

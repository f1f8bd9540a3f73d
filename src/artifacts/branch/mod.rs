pub mod branch_name;
pub mod revision;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

pub const REF_PREFIX: &str = "refs/heads/";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};

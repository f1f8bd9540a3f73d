//! Commit object
//!
//! A commit is an immutable snapshot record:
//! - Parent commit ID(s) (first parent is the mainline)
//! - Creation timestamp
//! - The complete file manifest (path -> blob ID), not a delta
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! date <unix-seconds> <timezone>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::PathBuf;

/// Environment variable overriding the commit timestamp
pub const COMMIT_DATE_ENV: &str = "MINIGIT_DATE";

/// Complete path -> blob mapping of a tree state
pub type Manifest = BTreeMap<PathBuf, ObjectId>;

/// Load the commit timestamp from `MINIGIT_DATE`, falling back to now
///
/// Accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
pub fn timestamp_from_env() -> DateTime<FixedOffset> {
    std::env::var(COMMIT_DATE_ENV)
        .ok()
        .and_then(|date_str| {
            DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        })
        .unwrap_or_else(|| chrono::Local::now().fixed_offset())
}

/// Slim representation of a commit
///
/// Only what the ancestor search needs: its own ID and its parents.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the root commit, two for merge commits)
    parents: Vec<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    manifest: Manifest,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        manifest: Manifest,
        message: String,
    ) -> Self {
        Commit {
            parents,
            timestamp,
            manifest,
            message,
        }
    }

    /// First line of the message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// The mainline parent
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }

    /// Timestamp like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    fn body_lines(&self) -> Vec<String> {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.manifest {
            lines.push(format!("file {oid} {}", path.to_string_lossy()));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines
    }

    fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, timezone) = value
            .split_once(' ')
            .context("Invalid commit object: malformed date line")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: invalid timestamp")?;
        let offset = DateTime::parse_from_str(&format!("1970-01-01 00:00:00 {timezone}"), "%Y-%m-%d %H:%M:%S %z")
            .context("Invalid commit object: invalid timezone")?
            .offset()
            .to_owned();

        DateTime::from_timestamp(seconds, 0)
            .map(|utc| utc.with_timezone(&offset))
            .context("Invalid commit object: timestamp out of range")
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        frame(self.object_type(), self.body_lines().join("\n").as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut manifest = Manifest::new();

        for line in header.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line:?}"))?;

            match key {
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "date" => timestamp = Some(Self::parse_date(value)?),
                "file" => {
                    let (oid, path) = value
                        .split_once(' ')
                        .context("Invalid commit object: malformed file line")?;
                    manifest.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown header {key:?}"),
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing date line")?;

        Ok(Self::new(parents, timestamp, manifest, message.to_string()))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.body_lines().join("\n")
    }
}

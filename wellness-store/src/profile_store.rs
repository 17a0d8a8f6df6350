//! Profiles and workout preferences keyed by username, in one JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wellness_core::{UserProfile, WorkoutPreference};

use crate::PROFILES_FILE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub workout: Option<WorkoutPreference>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self {
            path: dir.join(PROFILES_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, StoredUser>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let s = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&s).with_context(|| format!("parse {}", self.path.display()))
    }

    fn save(&self, users: &BTreeMap<String, StoredUser>) -> Result<()> {
        let json = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), users = users.len(), "saved profiles");
        Ok(())
    }

    pub fn usernames(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }

    pub fn get(&self, username: &str) -> Result<Option<UserProfile>> {
        Ok(self.load()?.remove(username).and_then(|u| u.profile))
    }

    /// Create or replace the profile; any stored workout preference is kept.
    pub fn put_profile(&self, username: &str, profile: UserProfile) -> Result<()> {
        let mut users = self.load()?;
        let baseline = profile.baseline_calories;
        users.entry(username.to_string()).or_default().profile = Some(profile);
        self.save(&users)?;
        info!(username, baseline, "saved profile");
        Ok(())
    }

    pub fn workout_preference(&self, username: &str) -> Result<Option<WorkoutPreference>> {
        Ok(self.load()?.remove(username).and_then(|u| u.workout))
    }

    pub fn workout_preference_or_default(&self, username: &str) -> Result<WorkoutPreference> {
        Ok(self.workout_preference(username)?.unwrap_or_default())
    }

    pub fn put_workout_preference(&self, username: &str, pref: WorkoutPreference) -> Result<()> {
        let mut users = self.load()?;
        users.entry(username.to_string()).or_default().workout = Some(pref);
        self.save(&users)?;
        info!(username, days = pref.days_per_week, "saved workout preference");
        Ok(())
    }
}

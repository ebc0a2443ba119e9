
use crate::{IdentityError, IdentityService, Result as IdentityErrorResult, USER_NOT_FOUND};

use rg_core::{ClaimSet, UserIdentity};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-process identity service with a fixed user population
pub(crate) struct InMemoryIdentityService {
    users: Mutex<HashMap<String, ClaimSet>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryIdentityService {
    pub(crate) fn with_users(uids: &[&str]) -> Self {
        Self {
            users: Mutex::new(
                uids.iter()
                    .map(|uid| (uid.to_string(), ClaimSet::new()))
                    .collect(),
            ),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn seed(&self, uid: &str, claims: ClaimSet) {
        self.users.lock().unwrap().insert(uid.to_string(), claims);
    }

    pub(crate) fn claims_of(&self, uid: &str) -> Option<ClaimSet> {
        self.users.lock().unwrap().get(uid).cloned()
    }

    pub(crate) fn snapshot(&self) -> HashMap<String, ClaimSet> {
        self.users.lock().unwrap().clone()
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn set_custom_claims(
        &self,
        uid: &UserIdentity,
        claims: &ClaimSet,
    ) -> IdentityErrorResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();

        match users.get_mut(uid.as_str()) {
            Some(existing) => {
                *existing = claims.clone();
                Ok(())
            }
            None => Err(IdentityError::invalid_identity(uid.as_str(), USER_NOT_FOUND)),
        }
    }

    async fn custom_claims(&self, uid: &UserIdentity) -> IdentityErrorResult<ClaimSet> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        self.claims_of(uid.as_str())
            .ok_or_else(|| IdentityError::invalid_identity(uid.as_str(), USER_NOT_FOUND))
    }
}

pub(crate) fn uid(value: &str) -> UserIdentity {
    UserIdentity::new(value).unwrap()
}

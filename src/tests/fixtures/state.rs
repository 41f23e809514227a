use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;
use crate::tests::fixtures::users::{known_passports, new_user};

static NEXT_PASSPORT: AtomicU32 = AtomicU32::new(1);

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(known_passports()))
}

/// Stores a user directly, bypassing the passport lookup.
pub async fn register_user(state: &AppState) -> UserId {
    let number = NEXT_PASSPORT.fetch_add(1, Ordering::Relaxed);
    state
        .users
        .insert(new_user(&format!("9000 {number:06}")))
        .await
        .expect("failed registering test user")
}

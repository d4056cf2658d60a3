//! Account lifecycle: registration, authentication, admin bootstrap, and
//! deletion.
//!
//! Password hashing is a collaborator behind the [`PasswordHasher`] trait;
//! the algorithm is chosen by the embedding application. [`Sha256Hasher`] is
//! a development default, not a production KDF.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::model::{Role, RoleId, User, UserId};
use crate::resolve::resolve_role_name;
use crate::store::TableStore;

/// The password-hashing facility consumed by registration and login.
pub trait PasswordHasher {
    fn hash(&self, plaintext: &str) -> String;
    fn verify(&self, hash: &str, plaintext: &str) -> bool;
}

/// Unsalted SHA-256 hashing, tagged with a scheme prefix.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let digest = Sha256::digest(plaintext.as_bytes());
        format!("sha256${}", hex::encode(digest))
    }

    fn verify(&self, hash: &str, plaintext: &str) -> bool {
        hash == self.hash(plaintext)
    }
}

/// Find a role id by name, falling back to a conventional id when the role
/// table is missing or incomplete.
fn role_id_by_name<S: TableStore>(store: &S, name: &str, fallback: u32) -> RoleId {
    store
        .load::<Role>()
        .into_iter()
        .find(|role| role.name == name)
        .map_or(RoleId::new(fallback), |role| role.id)
}

/// Register a new researcher account.
///
/// Usernames are unique case-sensitively; a duplicate is rejected and the
/// table is left unchanged.
pub fn register_user<S, H>(
    store: &S,
    hasher: &H,
    username: &str,
    password: &str,
    email: &str,
) -> Result<User>
where
    S: TableStore,
    H: PasswordHasher,
{
    if store
        .load::<User>()
        .iter()
        .any(|user| user.username == username)
    {
        return Err(Error::DuplicateUsername(username.to_string()));
    }

    let user = User::new(
        UserId::new(store.next_id::<User>()),
        username,
        hasher.hash(password),
        role_id_by_name(store, Role::RESEARCHER, 2),
        email,
    );
    store.append(&user)?;
    log::info!("registered user {username}");
    Ok(user)
}

/// Verify a username/password pair against the user table.
pub fn authenticate<S, H>(store: &S, hasher: &H, username: &str, password: &str) -> Option<User>
where
    S: TableStore,
    H: PasswordHasher,
{
    store
        .load::<User>()
        .into_iter()
        .find(|user| user.username == username)
        .filter(|user| hasher.verify(&user.password_hash, password))
}

/// Ensure the admin account exists, creating it on first use.
///
/// This is the admin-login bootstrap: the row is created with the `Admin`
/// role the first time the configured administrator signs in.
pub fn ensure_admin<S, H>(
    store: &S,
    hasher: &H,
    username: &str,
    password: &str,
    email: &str,
) -> Result<User>
where
    S: TableStore,
    H: PasswordHasher,
{
    if let Some(existing) = store
        .load::<User>()
        .into_iter()
        .find(|user| user.username == username)
    {
        return Ok(existing);
    }

    let user = User::new(
        UserId::new(store.next_id::<User>()),
        username,
        hasher.hash(password),
        role_id_by_name(store, Role::ADMIN, 1),
        email,
    );
    store.append(&user)?;
    log::info!("created admin account {username}");
    Ok(user)
}

/// Delete a user row.
///
/// Self-deletion is refused and leaves the table unchanged. Returns whether
/// a row was actually removed.
pub fn delete_user<S: TableStore>(store: &S, acting: UserId, target: UserId) -> Result<bool> {
    if acting == target {
        return Err(Error::SelfDeletion);
    }

    let users = store.load::<User>();
    let remaining: Vec<User> = users
        .iter()
        .filter(|user| user.id != target)
        .cloned()
        .collect();
    if remaining.len() == users.len() {
        return Ok(false);
    }

    store.replace(&remaining)?;
    log::info!("deleted user {}", target);
    Ok(true)
}

/// Authorization check: the user's role resolves to the admin role name.
pub fn is_admin<S: TableStore>(store: &S, user: &User) -> bool {
    resolve_role_name(store, user.role_id) == Role::ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn seeded_roles(store: &MemoryStore) {
        store
            .replace(&[
                Role::new(RoleId::new(1), Role::ADMIN, "manage_users,add_minerals"),
                Role::new(RoleId::new(2), Role::RESEARCHER, "view_dashboard"),
            ])
            .unwrap();
    }

    #[test]
    fn test_sha256_hasher_round_trip() {
        let hasher = Sha256Hasher;
        let hash = hasher.hash("hunter2");
        assert!(hash.starts_with("sha256$"));
        assert!(hasher.verify(&hash, "hunter2"));
        assert!(!hasher.verify(&hash, "hunter3"));
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let store = MemoryStore::new();
        seeded_roles(&store);

        let alice = register_user(&store, &Sha256Hasher, "alice", "pw", "a@example.org").unwrap();
        let bob = register_user(&store, &Sha256Hasher, "bob", "pw", "b@example.org").unwrap();
        assert_eq!(alice.id, UserId::new(1));
        assert_eq!(bob.id, UserId::new(2));
        assert_eq!(alice.role_id, RoleId::new(2));
    }

    #[test]
    fn test_duplicate_username_is_rejected() {
        let store = MemoryStore::new();
        seeded_roles(&store);

        register_user(&store, &Sha256Hasher, "alice", "pw", "a@example.org").unwrap();
        let err = register_user(&store, &Sha256Hasher, "alice", "pw2", "a2@example.org");
        assert!(matches!(err, Err(Error::DuplicateUsername(_))));
        assert_eq!(store.load::<User>().len(), 1);
    }

    #[test]
    fn test_username_uniqueness_is_case_sensitive() {
        let store = MemoryStore::new();
        seeded_roles(&store);

        register_user(&store, &Sha256Hasher, "alice", "pw", "a@example.org").unwrap();
        register_user(&store, &Sha256Hasher, "Alice", "pw", "A@example.org").unwrap();
        assert_eq!(store.load::<User>().len(), 2);
    }

    #[test]
    fn test_authenticate() {
        let store = MemoryStore::new();
        seeded_roles(&store);
        register_user(&store, &Sha256Hasher, "alice", "pw", "a@example.org").unwrap();

        assert!(authenticate(&store, &Sha256Hasher, "alice", "pw").is_some());
        assert!(authenticate(&store, &Sha256Hasher, "alice", "wrong").is_none());
        assert!(authenticate(&store, &Sha256Hasher, "nobody", "pw").is_none());
    }

    #[test]
    fn test_ensure_admin_creates_once() {
        let store = MemoryStore::new();
        seeded_roles(&store);

        let first = ensure_admin(&store, &Sha256Hasher, "admin", "pw", "admin@example.org").unwrap();
        let second =
            ensure_admin(&store, &Sha256Hasher, "admin", "pw", "admin@example.org").unwrap();
        assert_eq!(first, second);
        assert_eq!(store.load::<User>().len(), 1);
        assert!(is_admin(&store, &first));
    }

    #[test]
    fn test_delete_user_refuses_self_deletion() {
        let store = MemoryStore::new();
        seeded_roles(&store);
        let admin = ensure_admin(&store, &Sha256Hasher, "admin", "pw", "admin@example.org").unwrap();

        let err = delete_user(&store, admin.id, admin.id);
        assert!(matches!(err, Err(Error::SelfDeletion)));
        assert_eq!(store.load::<User>().len(), 1);
    }

    #[test]
    fn test_delete_user_removes_target() {
        let store = MemoryStore::new();
        seeded_roles(&store);
        let admin = ensure_admin(&store, &Sha256Hasher, "admin", "pw", "admin@example.org").unwrap();
        let alice = register_user(&store, &Sha256Hasher, "alice", "pw", "a@example.org").unwrap();

        assert!(delete_user(&store, admin.id, alice.id).unwrap());
        let users = store.load::<User>();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
    }

    #[test]
    fn test_delete_unknown_user_is_a_no_op() {
        let store = MemoryStore::new();
        seeded_roles(&store);
        let admin = ensure_admin(&store, &Sha256Hasher, "admin", "pw", "admin@example.org").unwrap();

        assert!(!delete_user(&store, admin.id, UserId::new(99)).unwrap());
        assert_eq!(store.load::<User>().len(), 1);
    }

    #[test]
    fn test_is_admin_is_a_role_name_comparison() {
        let store = MemoryStore::new();
        seeded_roles(&store);
        let admin = ensure_admin(&store, &Sha256Hasher, "admin", "pw", "admin@example.org").unwrap();
        let alice = register_user(&store, &Sha256Hasher, "alice", "pw", "a@example.org").unwrap();

        assert!(is_admin(&store, &admin));
        assert!(!is_admin(&store, &alice));
    }
}

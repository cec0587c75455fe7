use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Ownership guard for mutations on owned resources.
///
/// One decision function for every resource type: the actor may modify a
/// resource iff they own it or are a superuser. Pure, no I/O; the caller
/// supplies a freshly loaded actor, never claims data carried in a token.
pub fn can_modify(actor: &User, resource_owner_id: UserId) -> bool {
    actor.is_superuser || actor.id == resource_owner_id
}

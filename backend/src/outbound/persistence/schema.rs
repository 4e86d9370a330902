//! Diesel table definitions for the tables touched by account operations.
//!
//! Only the columns the adapters read or filter on are declared. Public
//! tables are owned by the application; `auth.sessions` belongs to the hosted
//! auth service and is addressed by schema.

diesel::table! {
    /// Shared study resources.
    resources (id) {
        id -> Uuid,
        /// Author of the resource.
        created_by -> Uuid,
    }
}

diesel::table! {
    study_group_members (id) {
        id -> Uuid,
        group_id -> Uuid,
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Directed follow edges between users.
    user_follows (follower_id, following_id) {
        follower_id -> Uuid,
        following_id -> Uuid,
    }
}

diesel::table! {
    notifications (id) {
        id -> Uuid,
        user_id -> Uuid,
    }
}

diesel::table! {
    group_invitations (id) {
        id -> Uuid,
        /// Inviting user.
        sent_by -> Uuid,
    }
}

diesel::table! {
    user_settings (user_id) {
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Public profile row, keyed by the auth user id.
    profiles (id) {
        id -> Uuid,
        display_name -> Nullable<Text>,
        avatar_url -> Nullable<Text>,
    }
}

diesel::table! {
    /// Refresh-token sessions issued by the auth service.
    auth.sessions (id) {
        id -> Uuid,
        user_id -> Uuid,
    }
}

use crate::core::{Result, User, UserSource};

/// Returns the first element of a slice, if any.
pub fn first_element<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// In-memory, append-only list of users belonging to one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserManager {
    organization_name: String,
    users: Vec<User>,
}

impl UserManager {
    /// Creates an empty registry. The name is stored as given, empty included.
    pub fn new(organization_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            users: Vec::new(),
        }
    }

    /// Creates a registry and appends everything `source` yields, in order.
    pub fn from_source<S: UserSource + ?Sized>(
        organization_name: impl Into<String>,
        source: &S,
    ) -> Result<Self> {
        let mut manager = Self::new(organization_name);
        let users = source.load_users()?;
        tracing::info!(
            "Seeding '{}' with {} users",
            manager.organization_name,
            users.len()
        );
        manager.extend(users);
        Ok(manager)
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn add_user(&mut self, user: User) {
        tracing::debug!("Adding user '{}' to '{}'", user.name, self.organization_name);
        self.users.push(user);
    }

    /// Looks up a user "by id".
    ///
    /// Users carry no id, and `id` is not consulted: this always returns the
    /// first user added, or `None` while the registry is empty. Callers that
    /// need positional access should use [`UserManager::users`].
    pub fn get_user_by_id(&self, id: i64) -> Option<&User> {
        let user = first_element(&self.users);
        match user {
            Some(u) => tracing::debug!("Lookup for id {} returned '{}'", id, u.name),
            None => tracing::warn!(
                "Lookup for id {} on empty registry '{}'",
                id,
                self.organization_name
            ),
        }
        user
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Extend<User> for UserManager {
    fn extend<I: IntoIterator<Item = User>>(&mut self, iter: I) {
        for user in iter {
            self.add_user(user);
        }
    }
}

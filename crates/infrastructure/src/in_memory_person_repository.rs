use std::collections::HashMap;

use async_trait::async_trait;
use rolegate_application::PersonRepository;
use rolegate_core::{AppResult, UserIdentity};
use rolegate_domain::Person;

/// In-memory person directory keyed by user name.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    people: HashMap<UserIdentity, Person>,
}

impl InMemoryPersonRepository {
    /// Creates a directory from a fixed list of people.
    #[must_use]
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: people
                .into_iter()
                .map(|person| (person.user_id.clone(), person))
                .collect(),
        }
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_person_by_user_id(&self, user_id: &UserIdentity) -> AppResult<Option<Person>> {
        Ok(self.people.get(user_id).cloned())
    }
}

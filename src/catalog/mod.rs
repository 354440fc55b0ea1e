pub mod heroes;
pub mod maps;
pub mod tags;

use std::collections::HashMap;

pub use heroes::{Difficulty, Hero, Role};
pub use tags::TagSet;

/// Read-only reference data: the hero roster in declaration order plus the
/// tag set the rule engine matches against.
#[derive(Debug, Clone)]
pub struct Catalog {
    heroes: Vec<Hero>,
    index: HashMap<String, usize>,
    tags: TagSet,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(heroes::default_heroes(), tags::default_tags())
    }
}

impl Catalog {
    /// Later duplicates of an id are ignored.
    pub fn new(heroes: Vec<Hero>, tags: TagSet) -> Self {
        let mut unique = Vec::with_capacity(heroes.len());
        let mut index = HashMap::new();
        for hero in heroes {
            if index.contains_key(&hero.id) {
                continue;
            }
            index.insert(hero.id.clone(), unique.len());
            unique.push(hero);
        }

        Catalog {
            heroes: unique,
            index,
            tags,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn get(&self, id: &str) -> Option<&Hero> {
        self.index.get(id).map(|&idx| &self.heroes[idx])
    }

    pub fn tags(&self, id: &str) -> &[String] {
        self.tags.get(id)
    }

    /// Heroes of one role, in catalog order.
    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(move |h| h.role == role)
    }

    /// Find a hero by exact id, or by case-insensitive display name.
    pub fn resolve(&self, query: &str) -> Option<&Hero> {
        let query = query.trim();
        if let Some(hero) = self.get(query) {
            return Some(hero);
        }
        let lowered = query.to_lowercase();
        self.heroes
            .iter()
            .find(|h| h.id == lowered || h.name.to_lowercase() == lowered)
    }

    /// Hero library listing: optional role and tier filters plus a
    /// substring match on name or role, sorted by name.
    pub fn search(
        &self,
        query: &str,
        role: Option<Role>,
        difficulty: Option<Difficulty>,
    ) -> Vec<&Hero> {
        let q = query.trim().to_lowercase();
        let mut list: Vec<&Hero> = self
            .heroes
            .iter()
            .filter(|h| role.map_or(true, |r| h.role == r))
            .filter(|h| difficulty.map_or(true, |d| h.difficulty == d))
            .filter(|h| {
                q.is_empty()
                    || h.name.to_lowercase().contains(&q)
                    || h.role.to_string().to_lowercase().contains(&q)
            })
            .collect();

        list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        list
    }
}

use std::collections::HashMap;

/// Playstyle tags per hero id. Tag order is insertion order only.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: HashMap<String, Vec<String>>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet {
            tags: HashMap::new(),
        }
    }

    pub fn insert(&mut self, hero_id: &str, tags: &[&str]) {
        let entry = self.tags.entry(hero_id.to_string()).or_default();
        for tag in tags {
            if !entry.iter().any(|t| t == tag) {
                entry.push(tag.to_string());
            }
        }
    }

    /// Unknown ids yield an empty slice.
    pub fn get(&self, hero_id: &str) -> &[String] {
        self.tags.get(hero_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

const DEFAULT_TAGS: &[(&str, &[&str])] = &[
    ("dva", &["Dive", "Mobile", "Large", "Peel"]),
    ("doomfist", &["Dive", "Disrupt", "Mobile", "CC", "Large"]),
    ("hazard", &["Dive", "Disrupt", "Mobile", "Large"]),
    ("junkerqueen", &["Brawl", "Sustain", "Large", "CC"]),
    ("mauga", &["Brawl", "Sustain", "Large", "Tank-Buster"]),
    ("orisa", &["Anchor", "Sustain", "Large", "CC"]),
    ("ramattra", &["Brawl", "Poke", "Sustain", "Large", "CC"]),
    ("reinhardt", &["Brawl", "Anchor", "Large", "CC"]),
    ("roadhog", &["Pick", "Sustain", "Large", "CC"]),
    ("sigma", &["Poke", "Anchor", "Large", "CC"]),
    ("winston", &["Dive", "Disrupt", "Mobile", "Large"]),
    ("wreckingball", &["Dive", "Disrupt", "Mobile", "Large", "CC"]),
    ("zarya", &["Beam", "Anchor", "Large", "Sustain"]),
    ("ashe", &["Hitscan", "Poke", "Off-Angle", "Burst"]),
    ("bastion", &["Hitscan", "Tank-Buster", "Burst", "Large"]),
    ("cassidy", &["Hitscan", "Peel", "CC", "Burst"]),
    ("echo", &["Aerial", "Projectile", "Burst", "Dive"]),
    ("freja", &["Projectile", "Burst", "Mobile", "Off-Angle"]),
    ("genji", &["Flank", "Dive", "Projectile", "Mobile"]),
    ("hanzo", &["Projectile", "Sniper", "Pick"]),
    ("junkrat", &["Projectile", "Spam", "CC", "Burst"]),
    ("mei", &["Brawl", "CC", "Sustain"]),
    ("pharah", &["Aerial", "Projectile", "Spam"]),
    ("reaper", &["Brawl", "Tank-Buster", "Burst"]),
    ("sojourn", &["Hitscan", "Burst", "Mobile", "Off-Angle"]),
    ("soldier76", &["Hitscan", "Poke", "Sustain"]),
    ("sombra", &["Flank", "Dive", "Hitscan", "Utility", "CC"]),
    ("symmetra", &["Beam", "Brawl", "Utility", "Spam"]),
    ("torbjorn", &["Projectile", "Brawl", "Sustain", "Spam"]),
    ("tracer", &["Flank", "Dive", "Mobile"]),
    ("venture", &["Brawl", "Dive", "Mobile", "CC"]),
    ("widowmaker", &["Sniper", "Hitscan", "Pick", "Off-Angle"]),
    ("vendetta", &["Projectile", "Burst", "Flank", "Mobile"]),
    ("ana", &["Anti-Heal", "Utility", "No Mobility", "CC"]),
    ("baptiste", &["Hitscan", "Utility", "Burst", "Sustain"]),
    ("brigitte", &["Peel", "CC", "Anti-Dive", "Brawl"]),
    ("illari", &["Hitscan", "Poke", "Burst"]),
    ("juno", &["Utility", "Mobile", "Sustain"]),
    ("kiriko", &["Cleanse", "Mobile", "Utility", "Burst"]),
    ("lifeweaver", &["Utility", "No Mobility", "Sustain"]),
    ("lucio", &["Mobile", "Utility", "Peel", "CC"]),
    ("mercy", &["Pocket", "Mobile", "Sustain"]),
    ("moira", &["Sustain", "Mobile", "Brawl"]),
    ("wuyang", &["Utility", "Mobile", "Burst", "Cleanse"]),
    ("zenyatta", &["Pick", "No Mobility", "Utility", "Burst"]),
];

pub fn default_tags() -> TagSet {
    let mut set = TagSet::new();
    for (hero_id, tags) in DEFAULT_TAGS {
        set.insert(hero_id, tags);
    }
    set
}

//! Dangling weak-reference report.

use std::fmt;

use super::snapshot::{CatalogSnapshot, Index};
use crate::record::{EntityKind, Record};

/// A stored id that names no record in the target collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Kind of the record holding the reference.
    pub kind: EntityKind,
    pub record_id: String,
    /// On-disk field path, e.g. `factionIds` or `skillTree.RK5.left`.
    pub field: String,
    pub missing_id: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} -> {} (missing)",
            self.kind, self.record_id, self.field, self.missing_id
        )
    }
}

/// Collects every reference in `snapshot` that does not resolve.
///
/// Empty ids count as unset and are not reported. Results are grouped by
/// holding kind, then storage order, then field.
pub fn dangling_references(snapshot: &CatalogSnapshot) -> Vec<DanglingReference> {
    let rarities = Index::new(&snapshot.rarities);
    let roles = Index::new(&snapshot.roles);
    let factions = Index::new(&snapshot.factions);
    let skills = Index::new(&snapshot.skills);
    let skill_effects = Index::new(&snapshot.skill_effects);
    let personality_skills = Index::new(&snapshot.personality_skills);
    let ex_skills = Index::new(&snapshot.ex_skills);

    let mut report = Report::default();

    for character in &snapshot.characters {
        let mut holder = report.holder(character);
        holder.check(&rarities, "rarityId", character.rarity_id.as_deref());
        holder.check(&roles, "roleId", character.role_id.as_deref());
        holder.check_all(&factions, "factionIds", &character.faction_ids);
        holder.check(
            &personality_skills,
            "personalitySkillId",
            character.personality_skill_id.as_deref(),
        );
        if let Some(tree) = &character.skill_tree {
            for (rank, node) in tree.nodes() {
                holder.check(
                    &skills,
                    &format!("skillTree.{rank}.left"),
                    node.left.as_deref(),
                );
                holder.check(
                    &skills,
                    &format!("skillTree.{rank}.right"),
                    node.right.as_deref(),
                );
            }
        }
        holder.check_all(&ex_skills, "exSkillIds", &character.ex_skill_ids);
    }

    for skill in &snapshot.skills {
        report
            .holder(skill)
            .check_all(&skill_effects, "effectIds", &skill.effect_ids);
    }
    for skill in &snapshot.personality_skills {
        report
            .holder(skill)
            .check_all(&skill_effects, "effectIds", &skill.effect_ids);
    }
    for skill in &snapshot.ex_skills {
        report
            .holder(skill)
            .check_all(&skill_effects, "effectIds", &skill.effect_ids);
    }
    for equipment in &snapshot.equipment {
        report
            .holder(equipment)
            .check(&rarities, "rarityId", equipment.rarity_id.as_deref());
    }
    for tarot in &snapshot.tarots {
        report
            .holder(tarot)
            .check(&rarities, "rarityId", Some(tarot.rarity_id.as_str()));
    }

    report.found
}

#[derive(Default)]
struct Report {
    found: Vec<DanglingReference>,
}

impl Report {
    fn holder<'r, H: Record>(&'r mut self, record: &'r H) -> Holder<'r> {
        Holder {
            kind: H::KIND,
            record_id: record.id(),
            found: &mut self.found,
        }
    }
}

struct Holder<'r> {
    kind: EntityKind,
    record_id: &'r str,
    found: &'r mut Vec<DanglingReference>,
}

impl Holder<'_> {
    fn check<T: Record>(&mut self, target: &Index<'_, T>, field: &str, id: Option<&str>) {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return;
        };
        if !target.contains(id) {
            self.found.push(DanglingReference {
                kind: self.kind,
                record_id: self.record_id.to_string(),
                field: field.to_string(),
                missing_id: id.to_string(),
            });
        }
    }

    fn check_all<T: Record>(&mut self, target: &Index<'_, T>, field: &str, ids: &[String]) {
        for id in ids {
            self.check(target, field, Some(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::skill::Skill;
    use crate::skill_effect::SkillEffect;
    use crate::tarot::Tarot;

    #[test]
    fn test_clean_catalog_reports_nothing() {
        assert!(dangling_references(&CatalogSnapshot::default()).is_empty());
    }

    #[test]
    fn test_reports_each_missing_id() {
        let characters: Vec<Character> = serde_json::from_value(serde_json::json!([
            {"id": "c1", "name": "A", "rarityId": "", "factionIds": ["f1", "f2"],
             "skillTree": {"RK5": {"left": "s1", "right": "s9"}}}
        ]))
        .unwrap();
        let skills: Vec<Skill> = serde_json::from_value(serde_json::json!([
            {"id": "s1", "name": "斬撃", "effectIds": ["se1", "se2"]}
        ]))
        .unwrap();
        let skill_effects: Vec<SkillEffect> = serde_json::from_value(serde_json::json!([
            {"id": "se1", "name": "攻撃力アップ", "description": "", "category": "バフ"}
        ]))
        .unwrap();
        let tarots: Vec<Tarot> = serde_json::from_value(serde_json::json!([
            {"id": "t1", "name": "塔", "rarityId": "r-gone", "acquisitionMethods": [],
             "createdAt": "t", "updatedAt": "t"}
        ]))
        .unwrap();
        let factions = vec![crate::faction::Faction {
            id: "f1".to_string(),
            name: "王国".to_string(),
            image: None,
        }];

        let snapshot = CatalogSnapshot {
            characters,
            factions,
            skills,
            skill_effects,
            tarots,
            ..Default::default()
        };
        let report = dangling_references(&snapshot);
        let summary: Vec<String> = report.iter().map(ToString::to_string).collect();
        assert_eq!(
            summary,
            vec![
                "character c1: factionIds -> f2 (missing)",
                "character c1: skillTree.RK5.right -> s9 (missing)",
                "skill s1: effectIds -> se2 (missing)",
                "tarot t1: rarityId -> r-gone (missing)",
            ]
        );
    }
}

//! Ingestion adapters
//!
//! The REST layer returns the same concepts in several shapes: a user skill
//! may arrive as `{skill_id, skill_name}`, as `{skill: {id, name}}` or as a
//! bare id, and group topics may be a list or a comma-separated string.
//! Each adapter below resolves those variations once, so the scoring code
//! only ever sees typed entities.

use crate::entity::{AvailabilitySlot, EntityKind, Profile, Project, SearchableEntity, SkillRef, StudyGroup};
use crate::id::{kind_of, EntityId, SkillId};
use crate::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// First of `keys` that is present and not null
fn field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|v| !v.is_null())
}

/// First of `keys` holding a non-blank string, trimmed
fn text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn required_id(record: &Value, keys: &[&str], kind: EntityKind) -> Result<EntityId> {
    let value = field(record, keys)
        .ok_or_else(|| Error::invalid(format!("{} record has no identifier ({})", kind, keys.join(" | "))))?;
    EntityId::try_from(value)
}

fn required_label(label: Option<String>, kind: EntityKind, id: &EntityId) -> Result<String> {
    label.ok_or_else(|| Error::invalid(format!("{} {} has no label", kind, id)))
}

fn ensure_object(record: &Value, kind: EntityKind) -> Result<()> {
    if record.is_object() {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} record must be an object, got {}", kind, kind_of(record))))
    }
}

/// Normalize one skill entry.
///
/// Accepted shapes: `3`, `"py"`, `{skill_id, skill_name}`,
/// `{skill: {id, name}}`, `{skill: 3}` and `{id, name}`. `skill_id` wins over
/// `id` because user-skill rows carry their own row id under `id`.
pub fn skill(value: &Value) -> Result<SkillRef> {
    if !value.is_object() {
        return Ok(SkillRef {
            id: SkillId::try_from(value)?,
            name: String::new(),
            proficiency: None,
        });
    }

    let nested = value.get("skill").filter(|v| !v.is_null());
    let id_value = match (value.get("skill_id").filter(|v| !v.is_null()), nested) {
        (Some(id), _) => Some(id),
        // the outer `id` is the row id once a nested skill object is present
        (None, Some(inner)) if inner.is_object() => inner.get("id").filter(|v| !v.is_null()),
        (None, Some(scalar)) => Some(scalar),
        (None, None) => value.get("id"),
    }
    .ok_or_else(|| Error::invalid("skill entry has no identifier"))?;

    let name = text(value, &["skill_name"])
        .or_else(|| nested.and_then(|inner| text(inner, &["name"])))
        .or_else(|| text(value, &["name"]))
        .unwrap_or_default();

    let proficiency = field(value, &["proficiency_level", "proficiency"])
        .and_then(Value::as_u64)
        .map(|p| p.min(u64::from(u8::MAX)) as u8);

    Ok(SkillRef {
        id: SkillId::try_from(id_value)?,
        name,
        proficiency,
    })
}

fn skills(record: &Value, keys: &[&str]) -> Result<Vec<SkillRef>> {
    match field(record, keys) {
        Some(Value::Array(items)) => items.iter().map(skill).collect(),
        _ => Ok(Vec::new()),
    }
}

fn member(value: &Value) -> Option<EntityId> {
    match value {
        Value::Object(_) => {
            let inner = field(value, &["usn", "user", "user_id", "id"])?;
            if inner.is_object() {
                member(inner)
            } else {
                EntityId::try_from(inner).ok()
            }
        }
        other => EntityId::try_from(other).ok(),
    }
}

fn members(record: &Value) -> Vec<EntityId> {
    let Some(Value::Array(items)) = field(record, &["members"]) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let id = member(item);
            if id.is_none() {
                debug!("Skipping member entry without a usable id: {}", item);
            }
            id
        })
        .collect()
}

fn topics(record: &Value) -> Vec<String> {
    let split = |s: &str| -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    };

    match field(record, &["topics", "topics_display"]) {
        Some(Value::String(s)) => split(s),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Object(_) => text(item, &["name"]),
                _ => None,
            })
            .filter(|t| !t.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn availability(record: &Value) -> Vec<AvailabilitySlot> {
    let Some(Value::Array(items)) = field(record, &["availability"]) else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|slot| slot.get("is_available").and_then(Value::as_bool).unwrap_or(true))
        .filter_map(|slot| {
            let day = match slot.get("day_of_week")? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some(AvailabilitySlot {
                day_of_week: day,
                start: text(slot, &["time_slot_start", "start"])?,
                end: text(slot, &["time_slot_end", "end"])?,
            })
        })
        .collect()
}

pub fn project(record: &Value) -> Result<Project> {
    ensure_object(record, EntityKind::Project)?;
    let id = required_id(record, &["project_id", "id"], EntityKind::Project)?;
    let title = required_label(text(record, &["title"]), EntityKind::Project, &id)?;

    Ok(Project {
        title,
        description: text(record, &["description"]),
        skills: skills(record, &["skills", "required_skills"])?,
        members: members(record),
        project_type: text(record, &["project_type"]),
        status: text(record, &["status"]),
        id,
    })
}

pub fn study_group(record: &Value) -> Result<StudyGroup> {
    ensure_object(record, EntityKind::StudyGroup)?;
    let id = required_id(record, &["group_id", "id"], EntityKind::StudyGroup)?;
    let name = required_label(text(record, &["name"]), EntityKind::StudyGroup, &id)?;

    Ok(StudyGroup {
        name,
        subject_area: text(record, &["subject_area"]),
        course_code: text(record, &["course_code"]),
        topics: topics(record),
        description: text(record, &["description"]),
        skills: skills(record, &["skills", "required_skills"])?,
        members: members(record),
        id,
    })
}

pub fn profile(record: &Value) -> Result<Profile> {
    ensure_object(record, EntityKind::Profile)?;
    let id = required_id(record, &["usn", "id", "user_id"], EntityKind::Profile)?;

    let joined_name = {
        let parts: Vec<String> = ["first_name", "last_name"]
            .iter()
            .filter_map(|key| text(record, &[*key]))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    };
    let full_name = required_label(
        text(record, &["full_name", "name"]).or(joined_name),
        EntityKind::Profile,
        &id,
    )?;

    let department = match record.get("department") {
        Some(Value::Object(_)) => record.get("department").and_then(|d| text(d, &["name"])),
        _ => text(record, &["department"]),
    };
    let bio = text(record, &["bio"]).or_else(|| record.get("profile").and_then(|p| text(p, &["bio"])));

    Ok(Profile {
        full_name,
        department,
        bio,
        skills: skills(record, &["skills"])?,
        availability: availability(record),
        id,
    })
}

/// Dispatch to the adapter for `kind`
pub fn entity(kind: EntityKind, record: &Value) -> Result<SearchableEntity> {
    Ok(match kind {
        EntityKind::Project => project(record)?.into(),
        EntityKind::StudyGroup => study_group(record)?.into(),
        EntityKind::Profile => profile(record)?.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_shapes() {
        let flat = skill(&json!({"id": 90, "skill_id": 4, "skill_name": "Rust", "proficiency_level": 3})).unwrap();
        assert_eq!(flat, SkillRef::new(4u64, "Rust").with_proficiency(3));

        let nested = skill(&json!({"skill": {"id": 5, "name": "SQL"}})).unwrap();
        assert_eq!(nested, SkillRef::new(5u64, "SQL"));

        let plain = skill(&json!({"id": 6, "name": "Go"})).unwrap();
        assert_eq!(plain, SkillRef::new(6u64, "Go"));

        let scalar_nested = skill(&json!({"skill": 7, "name": "C"})).unwrap();
        assert_eq!(scalar_nested.id, SkillId::Integer(7));

        let bare = skill(&json!("ml")).unwrap();
        assert_eq!(bare.id, SkillId::String("ml".to_string()));
        assert!(bare.name.is_empty());
    }

    #[test]
    fn test_skill_with_bad_id_is_rejected() {
        assert!(skill(&json!({"skill_id": 1.5, "skill_name": "x"})).unwrap_err().is_invalid_input());
        assert!(skill(&json!({"skill_name": "x"})).unwrap_err().is_invalid_input());
        assert!(skill(&json!(true)).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_nested_skill_without_id_ignores_row_id() {
        let err = skill(&json!({"id": 31, "skill": {"name": "Rust"}})).unwrap_err();
        assert!(err.is_invalid_input());

        let nested = skill(&json!({"id": 31, "skill": {"id": 4, "name": "Rust"}})).unwrap();
        assert_eq!(nested.id, SkillId::Integer(4));
    }

    #[test]
    fn test_project_record() {
        let record = json!({
            "project_id": 12,
            "title": "Campus Navigator",
            "description": "Indoor maps",
            "project_type": "academic",
            "skills": [{"skill": {"id": 1, "name": "Python"}}],
            "members": [{"usn": "1RV21CS001", "name": "Asha"}, "1RV21CS002"]
        });
        let project = project(&record).unwrap();
        assert_eq!(project.id, EntityId::Integer(12));
        assert_eq!(project.skills, vec![SkillRef::new(1u64, "Python")]);
        assert_eq!(
            project.members,
            vec![EntityId::from("1RV21CS001"), EntityId::from("1RV21CS002")]
        );
        assert_eq!(project.project_type.as_deref(), Some("academic"));
    }

    #[test]
    fn test_group_topics_from_comma_string() {
        let record = json!({
            "group_id": 4,
            "name": "DSA Grind",
            "subject_area": "Computer Science",
            "course_code": " CS301 ",
            "topics": "graphs, dynamic programming,, trees",
            "members": [{"user": {"usn": "u1"}}, {"user": "u2"}]
        });
        let group = study_group(&record).unwrap();
        assert_eq!(group.topics, vec!["graphs", "dynamic programming", "trees"]);
        assert_eq!(group.course_code.as_deref(), Some("CS301"));
        assert_eq!(group.members, vec![EntityId::from("u1"), EntityId::from("u2")]);
    }

    #[test]
    fn test_group_topics_display_fallback() {
        let record = json!({"id": 4, "name": "G", "topics_display": ["a", " b "]});
        assert_eq!(study_group(&record).unwrap().topics, vec!["a", "b"]);
    }

    #[test]
    fn test_profile_record() {
        let record = json!({
            "usn": "1RV21CS001",
            "first_name": "Asha",
            "last_name": "Rao",
            "department": {"name": "CSE"},
            "profile": {"bio": "Likes compilers"},
            "skills": [{"id": 31, "skill_id": 2, "skill_name": "Rust"}],
            "availability": [
                {"day_of_week": "Mon", "time_slot_start": "09:00", "time_slot_end": "10:00"},
                {"day_of_week": "Tue", "time_slot_start": "09:00", "time_slot_end": "10:00", "is_available": false},
                {"day_of_week": "Wed"}
            ]
        });
        let profile = profile(&record).unwrap();
        assert_eq!(profile.full_name, "Asha Rao");
        assert_eq!(profile.department.as_deref(), Some("CSE"));
        assert_eq!(profile.bio.as_deref(), Some("Likes compilers"));
        assert_eq!(profile.skills, vec![SkillRef::new(2u64, "Rust")]);
        assert_eq!(profile.availability, vec![AvailabilitySlot::new("Mon", "09:00", "10:00")]);
    }

    #[test]
    fn test_missing_id_or_label_rejected() {
        assert!(project(&json!({"title": "No id"})).unwrap_err().is_invalid_input());
        assert!(study_group(&json!({"group_id": 1})).unwrap_err().is_invalid_input());
        assert!(profile(&json!({"usn": "u1", "full_name": "  "})).unwrap_err().is_invalid_input());
        assert!(profile(&json!("u1")).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_entity_dispatch_sets_kind() {
        let entity = entity(EntityKind::StudyGroup, &json!({"id": 1, "name": "G"})).unwrap();
        assert_eq!(entity.kind(), EntityKind::StudyGroup);
    }
}

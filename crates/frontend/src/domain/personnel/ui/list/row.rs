use contracts::domain::personnel::aggregate::{Person, PersonUpdate};
use contracts::domain::personnel::catalog::{QualCatalog, QualMark};

/// Pending selections while a row is in edit mode. Seeded from the
/// displayed values when editing starts; applied to them on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub org: String,
    pub marks: Vec<QualMark>,
}

/// Displayed values of a row before a save was applied, kept so a failed
/// save can be rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    org: String,
    marks: Vec<QualMark>,
}

/// One roster table row: the record it came from, the currently displayed
/// values, and the edit selections while the row is in edit mode.
///
/// Rows are addressed by `source.id` only; several rows may be in edit
/// mode at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRow {
    pub source: Person,
    pub name: String,
    pub org: String,
    pub marks: Vec<QualMark>,
    edit: Option<RowEdit>,
}

impl PersonRow {
    pub fn from_person(person: Person, catalog: &QualCatalog) -> Self {
        let name = person.display_name();
        let org = person
            .assigned_org
            .as_ref()
            .map(|o| o.name.clone())
            .unwrap_or_default();
        let marks = catalog.marks_for(&person.quals);
        Self {
            source: person,
            name,
            org,
            marks,
            edit: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.source.id
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Switch the row to edit mode, seeding selections from the displayed
    /// values. Already-editing rows keep their pending selections.
    pub fn enter_edit(&mut self) {
        if self.edit.is_none() {
            self.edit = Some(RowEdit {
                org: self.org.clone(),
                marks: self.marks.clone(),
            });
        }
    }

    pub fn edit_org(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.org.as_str())
    }

    pub fn edit_marks(&self) -> Option<&[QualMark]> {
        self.edit.as_ref().map(|e| e.marks.as_slice())
    }

    pub fn set_edit_org(&mut self, org: String) {
        if let Some(edit) = self.edit.as_mut() {
            edit.org = org;
        }
    }

    /// Update one qualification selection, addressed by name.
    pub fn set_edit_mark(&mut self, qual_name: &str, marker: String) {
        if let Some(edit) = self.edit.as_mut() {
            if let Some(mark) = edit.marks.iter_mut().find(|m| m.name == qual_name) {
                mark.marker = marker;
            }
        }
    }

    /// Apply the pending selections to the displayed values and leave edit
    /// mode. Returns the update payload to send plus a snapshot of the
    /// replaced display values for rollback; None when the row was not in
    /// edit mode.
    ///
    /// The display updates before the request is dispatched; the caller
    /// decides what to do with the request result.
    pub fn save(&mut self) -> Option<(PersonUpdate, RowSnapshot)> {
        let edit = self.edit.take()?;

        let snapshot = RowSnapshot {
            org: std::mem::replace(&mut self.org, edit.org),
            marks: std::mem::replace(&mut self.marks, edit.marks),
        };

        let mut update = PersonUpdate::from_person(&self.source);
        update.assigned_org = (!self.org.is_empty()).then(|| self.org.clone());
        update.quals = QualCatalog::selected_names(&self.marks);

        Some((update, snapshot))
    }

    /// Undo an optimistic save after the backend rejected it.
    pub fn rollback(&mut self, snapshot: RowSnapshot) {
        self.org = snapshot.org;
        self.marks = snapshot.marks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::personnel::aggregate::{Organization, Qualification};
    use contracts::domain::personnel::catalog::QUAL_PRESENT;

    fn person(id: i32, org: Option<&str>, quals: &[&str]) -> Person {
        Person {
            id,
            first_name: "Joshua".into(),
            middle_name: String::new(),
            last_name: "Keeler".into(),
            ausm_tier: 2,
            assigned_org: org.map(|name| Organization {
                id: 1,
                name: name.into(),
            }),
            quals: quals
                .iter()
                .enumerate()
                .map(|(i, name)| Qualification {
                    id: i as i32 + 1,
                    name: (*name).into(),
                })
                .collect(),
        }
    }

    #[test]
    fn edit_then_save_unchanged_is_identity() {
        let catalog = QualCatalog::standard();
        let mut row = PersonRow::from_person(person(1, Some("O"), &["SOF"]), &catalog);
        let before_org = row.org.clone();
        let before_marks = row.marks.clone();

        row.enter_edit();
        let (update, _) = row.save().unwrap();

        assert!(!row.is_editing());
        assert_eq!(row.org, before_org);
        assert_eq!(row.marks, before_marks);
        assert_eq!(update.assigned_org.as_deref(), Some("O"));
        assert_eq!(update.quals, vec!["SOF"]);
    }

    #[test]
    fn marks_always_cover_catalog() {
        let catalog = QualCatalog::standard();
        let mut row = PersonRow::from_person(person(1, None, &[]), &catalog);
        row.enter_edit();
        row.set_edit_mark("SEFE", QUAL_PRESENT.into());
        row.save().unwrap();

        assert_eq!(row.marks.len(), catalog.len());
        for (mark, name) in row.marks.iter().zip(catalog.names()) {
            assert_eq!(&mark.name, name);
        }
    }

    #[test]
    fn sof_only_selection() {
        let catalog = QualCatalog::new(["Operations Supervisor", "SOF"]);
        let mut row = PersonRow::from_person(person(1, None, &[]), &catalog);
        row.enter_edit();
        row.set_edit_mark("SOF", QUAL_PRESENT.into());
        let (update, _) = row.save().unwrap();

        assert_eq!(row.marks[0].name, "Operations Supervisor");
        assert_eq!(row.marks[0].marker, "");
        assert_eq!(row.marks[1].name, "SOF");
        assert_eq!(row.marks[1].marker, "X");
        assert_eq!(update.quals, vec!["SOF"]);
    }

    #[test]
    fn save_applies_optimistically_and_rolls_back() {
        let catalog = QualCatalog::standard();
        let mut row = PersonRow::from_person(person(1, Some("O"), &["SOF"]), &catalog);
        row.enter_edit();
        row.set_edit_org("M".into());
        row.set_edit_mark("SEFE", QUAL_PRESENT.into());
        let (update, snapshot) = row.save().unwrap();

        // display reflects the new values before any response arrives
        assert_eq!(row.org, "M");
        assert_eq!(update.assigned_org.as_deref(), Some("M"));
        assert_eq!(update.quals, vec!["SOF", "SEFE"]);

        row.rollback(snapshot);
        assert_eq!(row.org, "O");
        assert!(row.marks.iter().find(|m| m.name == "SEFE").unwrap().marker.is_empty());
    }

    #[test]
    fn clearing_org_sends_none() {
        let catalog = QualCatalog::standard();
        let mut row = PersonRow::from_person(person(1, Some("O"), &[]), &catalog);
        row.enter_edit();
        row.set_edit_org(String::new());
        let (update, _) = row.save().unwrap();
        assert_eq!(update.assigned_org, None);
    }

    #[test]
    fn save_without_edit_is_noop() {
        let catalog = QualCatalog::standard();
        let mut row = PersonRow::from_person(person(1, None, &[]), &catalog);
        assert!(row.save().is_none());
    }

    #[test]
    fn rows_edit_independently() {
        let catalog = QualCatalog::standard();
        let mut a = PersonRow::from_person(person(1, None, &[]), &catalog);
        let mut b = PersonRow::from_person(person(2, None, &[]), &catalog);

        a.enter_edit();
        b.enter_edit();
        assert!(a.is_editing() && b.is_editing());

        a.save().unwrap();
        assert!(!a.is_editing());
        assert!(b.is_editing());
    }
}

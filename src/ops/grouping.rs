use indexmap::IndexMap;

use crate::model::task::{Category, Task};

/// Group tasks by category. Groups appear in order of each category's first
/// task; tasks keep their relative order inside a group. Categories without
/// tasks are absent.
pub fn group_by_category<'a, I>(tasks: I) -> IndexMap<Category, Vec<&'a Task>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups: IndexMap<Category, Vec<&'a Task>> = IndexMap::new();
    for task in tasks {
        groups.entry(task.category).or_default().push(task);
    }
    groups
}

/// Grouping for the primary list view: only tasks that are not done.
pub fn pending_by_category(tasks: &[Task]) -> IndexMap<Category, Vec<&Task>> {
    group_by_category(tasks.iter().filter(|t| !t.is_done()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{NewTask, Status};
    use crate::ops::task_ops::TaskStore;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn store() -> TaskStore {
        let due = NaiveDate::from_ymd_opt(2025, 5, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut store = TaskStore::new();
        for (title, category) in [
            ("Lineout drills", Category::Rugby),
            ("Essay", Category::School),
            ("Scrum practice", Category::Rugby),
            ("Scales", Category::Music),
            ("Exam prep", Category::School),
        ] {
            store.add(NewTask::new(title, category, due)).unwrap();
        }
        store
    }

    fn titles(group: &[&Task]) -> Vec<String> {
        group.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn groups_follow_first_appearance() {
        let store = store();
        let groups = group_by_category(store.all());
        let keys: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(keys, vec![Category::Rugby, Category::School, Category::Music]);
        assert_eq!(titles(&groups[&Category::Rugby]), vec!["Lineout drills", "Scrum practice"]);
        assert_eq!(titles(&groups[&Category::School]), vec!["Essay", "Exam prep"]);
    }

    #[test]
    fn empty_categories_are_absent() {
        let store = store();
        let groups = group_by_category(store.all());
        assert!(!groups.contains_key(&Category::Personal));
        assert!(groups.values().all(|g| !g.is_empty()));
    }

    #[test]
    fn pending_excludes_done_and_drops_emptied_groups() {
        let mut store = store();
        let scales = store.all()[3].id;
        let essay = store.all()[1].id;
        store.set_status(scales, Status::Done);
        store.set_status(essay, Status::Done);

        let groups = pending_by_category(store.all());
        assert!(!groups.contains_key(&Category::Music));
        assert_eq!(titles(&groups[&Category::School]), vec!["Exam prep"]);

        let members: usize = groups.values().map(Vec::len).sum();
        let not_done = store.all().iter().filter(|t| !t.is_done()).count();
        assert_eq!(members, not_done);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(pending_by_category(&[]).is_empty());
    }
}

use crate::NewProject;

#[test]
fn test_new_project() {
    let draft = NewProject::new("Apollo");

    assert_eq!(draft.name, "Apollo");
    assert_eq!(draft.description, None);
}

use carrental_core::{
    CarController, ConsoleError, FieldError, NewCar, RecordRepository, RepoError,
    SqliteCarRepository,
};

fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn insert_adds_exactly_one_matching_row() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteCarRepository::open(dir.path().join("main.db")).unwrap();
    let controller = CarController::new(repo);

    let id = controller.insert(&fields(&["Sedan", "12.5", "0.3"])).unwrap();

    let cars = controller.list_items().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, id);
    assert_eq!(cars[0].model, "Sedan");
    assert_eq!(cars[0].hourly_price, 12.5);
    assert_eq!(cars[0].km_price, 0.3);
}

#[test]
fn ids_strictly_increase() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteCarRepository::open(dir.path().join("main.db")).unwrap();

    let first = repo.insert(&NewCar::new("Hatchback", 8.0, 0.2)).unwrap();
    let second = repo.insert(&NewCar::new("Pickup", 15.0, 0.4)).unwrap();
    let third = repo.insert(&NewCar::new("Coupe", 22.0, 0.6)).unwrap();
    assert!(first < second && second < third);

    let ids: Vec<_> = repo.list_all().unwrap().into_iter().map(|car| car.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn rows_persist_across_repository_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.db");

    let id = SqliteCarRepository::open(&path)
        .unwrap()
        .insert(&NewCar::new("Sedan", 12.5, 0.3))
        .unwrap();

    let reopened = SqliteCarRepository::open(&path).unwrap();
    let cars = reopened.list_all().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, id);
}

#[test]
fn non_numeric_price_fails_without_touching_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteCarRepository::open(dir.path().join("main.db")).unwrap();
    let controller = CarController::new(repo);
    controller.insert(&fields(&["Sedan", "12.5", "0.3"])).unwrap();

    let err = controller
        .insert(&fields(&["Roadster", "abc", "0.3"]))
        .unwrap_err();

    match err {
        ConsoleError::Repo(RepoError::Field(FieldError::NotANumber { field, value })) => {
            assert_eq!(field, "hourly price");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(controller.list_items().unwrap().len(), 1);
}

#[test]
fn wrong_field_count_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteCarRepository::open(dir.path().join("main.db")).unwrap();
    let controller = CarController::new(repo);

    let err = controller.insert(&fields(&["Sedan", "12.5"])).unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Repo(RepoError::Field(FieldError::FieldCount {
            expected: 3,
            actual: 2
        }))
    ));
    assert!(controller.list_items().unwrap().is_empty());
}

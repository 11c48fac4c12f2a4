use carrental_core::{
    ClientController, Controller, NewClient, RecordRepository, SqliteCarRepository,
    SqliteClientRepository,
};
use std::io::Cursor;

#[test]
fn insert_and_list_keeps_values_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteClientRepository::open(dir.path().join("main.db")).unwrap();

    let id = repo
        .insert(&NewClient::new("Ada", "Lovelace", "not an email"))
        .unwrap();

    let clients = repo.list_all().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, id);
    assert_eq!(clients[0].name, "Ada");
    assert_eq!(clients[0].surname, "Lovelace");
    assert_eq!(clients[0].email, "not an email");
}

#[test]
fn clients_and_cars_share_a_file_but_not_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.db");
    let cars = SqliteCarRepository::open(&path).unwrap();
    let clients = SqliteClientRepository::open(&path).unwrap();

    clients
        .insert(&NewClient::new("Grace", "Hopper", "grace@example.com"))
        .unwrap();

    assert!(cars.list_all().unwrap().is_empty());
    assert_eq!(clients.list_all().unwrap().len(), 1);
}

#[test]
fn add_item_prompts_in_order_and_print_renders_rows() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteClientRepository::open(dir.path().join("main.db")).unwrap();
    let controller = ClientController::new(repo);

    let mut input = Cursor::new("Grace\nHopper\ngrace@example.com\n");
    let mut output = Vec::new();
    controller.add_item(&mut input, &mut output).unwrap();
    controller.print_items(&mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "Enter client name: Enter client surname: Enter client email: \
         Client added successfully.\n\
         Client List:\n\
         Id: 1, Name: Grace, Surname: Hopper, Email: grace@example.com\n"
    );
}

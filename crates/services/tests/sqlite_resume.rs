use lingo_core::model::Language;
use lingo_core::time::fixed_clock;
use services::{AppServices, Screen, View};

#[tokio::test]
async fn progress_survives_a_new_controller_on_sqlite() {
    let services = AppServices::new_sqlite(
        "sqlite:file:memdb_services_resume?mode=memory&cache=shared",
        fixed_clock(),
    )
    .await
    .expect("sqlite services");

    let mut first = services.controller();
    first.startup().await;
    first.login("marie", Language::Canadian).await.unwrap();
    first.next().await.unwrap();
    first.toggle_known().await.unwrap();
    drop(first);

    let mut second = services.controller();
    second.startup().await;

    assert_eq!(second.state().screen(), Screen::LoggedIn(View::Cards));
    assert_eq!(second.state().language(), Language::Canadian);
    let view = second.card_view().unwrap();
    assert_eq!(view.progress.position, 2);
    assert!(view.is_known);

    let report = services
        .report("marie", Language::Canadian)
        .await
        .unwrap();
    assert_eq!(report.overall.known, 1);
}

use playwright_page_factory::{PageObject, Selector, SelectorSession, init_annotated_locators};
use std::sync::OnceLock;

#[derive(Default, PageObject)]
struct LoginPage {
    #[locate_by(strategy = Label, value = "Username")]
    username: Option<Selector>,
    #[locate_by(strategy = Placeholder, pattern = "(?i)^pass")]
    password: Option<Selector>,
    #[locate_by(strategy = Role, role = Button, value = "Submit")]
    submit: OnceLock<Selector>,
    #[locate_by(value = "#login-button")]
    login: Option<Selector>,
    attempts: u32,
}

#[derive(PageObject)]
struct Blank;

fn main() {
    let mut page = LoginPage::default();
    let report = init_annotated_locators(&SelectorSession::new(), &mut page).unwrap();
    assert!(report.is_complete());
    assert!(page.username.is_some());
    assert!(page.password.is_some());
    assert!(page.submit.get().is_some());
    assert!(page.login.is_some());
    assert_eq!(page.attempts, 0);

    let mut blank = Blank;
    assert!(init_annotated_locators(&SelectorSession::new(), &mut blank).unwrap().is_empty());
}

use playwright_page_factory::{PageObject, Selector, SelectorSession, init_annotated_locators};

#[allow(non_snake_case)]
#[derive(Default, PageObject)]
struct SignupPage {
    #[locate_by(strategy = Label, value = "User name")]
    userName: Option<Selector>,
    #[locate_by(strategy = Placeholder, value = "username")]
    username: Option<Selector>,
}

fn main() {
    let mut page = SignupPage::default();
    let report = init_annotated_locators(&SelectorSession::new(), &mut page).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(
        page.userName.unwrap().as_str(),
        "internal:label=\"User name\"i"
    );
    assert_eq!(
        page.username.unwrap().as_str(),
        "internal:attr=[placeholder=\"username\"i]"
    );
}

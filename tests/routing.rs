//! Integration tests for the route gate
//!
//! These tests run paths through the application route table with anonymous,
//! member and admin sessions and check what the gate decides.

use proptest::prelude::*;

use notreddit_ui::config::{ADMIN_ROLE, HOME_PATH, MODERATOR_ROLE};
use notreddit_ui::models::{Session, User};
use notreddit_ui::routes::{resolve, Outcome, Page, UserListing};

fn member(roles: &[&str]) -> Session {
    Session::authenticated(User {
        id: "u-1".to_string(),
        username: "alice".to_string(),
        roles: roles.iter().map(|r| (*r).to_string()).collect(),
    })
}

fn any_session() -> impl Strategy<Value = Session> {
    prop_oneof![
        Just(Session::anonymous()),
        Just(member(&["USER"])),
        Just(member(&["USER", MODERATOR_ROLE])),
        Just(member(&["USER", ADMIN_ROLE])),
    ]
}

#[test]
fn test_anonymous_create_subreddit_redirects_home() {
    assert_eq!(
        resolve("/subreddit/create", &Session::anonymous()),
        Outcome::Redirect(HOME_PATH)
    );
}

#[test]
fn test_member_without_admin_cannot_list_users() {
    assert_eq!(resolve("/user/all", &member(&["USER"])), Outcome::Redirect(HOME_PATH));
    assert_eq!(
        resolve("/user/all", &member(&["USER", MODERATOR_ROLE])),
        Outcome::Redirect(HOME_PATH)
    );
}

#[test]
fn test_admin_lists_users() {
    assert_eq!(
        resolve("/user/all", &member(&["USER", ADMIN_ROLE])),
        Outcome::Render(Page::AllUsers)
    );
}

#[test]
fn test_unknown_path_is_not_found() {
    assert_eq!(resolve("/nonexistent/path", &Session::anonymous()), Outcome::NotFound);
    assert_eq!(resolve("/nonexistent/path", &member(&["USER"])), Outcome::NotFound);
}

#[test]
fn test_signed_in_members_skip_login_and_signup() {
    let session = member(&["USER"]);
    assert_eq!(resolve("/login", &session), Outcome::Redirect(HOME_PATH));
    assert_eq!(resolve("/signup", &session), Outcome::Redirect(HOME_PATH));
    assert_eq!(resolve("/login", &Session::anonymous()), Outcome::Render(Page::Login));
}

#[test]
fn test_member_only_pages() {
    let session = member(&["USER"]);
    assert_eq!(resolve("/post/create", &session), Outcome::Render(Page::PostCreate));
    assert_eq!(resolve("/subreddit/create", &session), Outcome::Render(Page::SubredditCreate));
    assert_eq!(resolve("/user/mentions", &session), Outcome::Render(Page::Mentions));
    assert_eq!(
        resolve("/user/mentions", &Session::anonymous()),
        Outcome::Redirect(HOME_PATH)
    );
}

#[test]
fn test_literal_routes_win_over_parameters() {
    let anonymous = Session::anonymous();
    assert_eq!(resolve("/subreddit/all", &anonymous), Outcome::Render(Page::SubredditList));
    assert_eq!(
        resolve("/subreddit/rust", &anonymous),
        Outcome::Render(Page::SubredditPosts {
            subreddit: "rust".to_string()
        })
    );
    // /post/create is guarded, never treated as a post id
    assert_eq!(resolve("/post/create", &anonymous), Outcome::Redirect(HOME_PATH));
}

#[test]
fn test_user_pages() {
    let anonymous = Session::anonymous();
    let posts = Outcome::Render(Page::UserPosts {
        username: "bob".to_string(),
        listing: UserListing::Posts,
    });
    assert_eq!(resolve("/user/bob", &anonymous), posts);
    assert_eq!(resolve("/user/bob/posts", &anonymous), posts);
    assert_eq!(
        resolve("/user/bob/upvoted", &anonymous),
        Outcome::Render(Page::UserPosts {
            username: "bob".to_string(),
            listing: UserListing::Upvoted,
        })
    );
    assert_eq!(
        resolve("/user/bob/comments", &anonymous),
        Outcome::Render(Page::UserComments {
            username: "bob".to_string()
        })
    );
    assert_eq!(resolve("/user/bob/posts/extra", &anonymous), Outcome::NotFound);
}

#[test]
fn test_post_details_ignores_query_and_trailing_segments() {
    let expected = Outcome::Render(Page::PostDetails {
        id: "42".to_string(),
    });
    assert_eq!(resolve("/post/42", &Session::anonymous()), expected);
    assert_eq!(resolve("/post/42/comments?sort=top", &Session::anonymous()), expected);
}

#[test]
fn test_anonymous_session_has_no_roles() {
    let session = Session::anonymous();
    assert!(!session.has_role(ADMIN_ROLE));
    assert!(!session.is_authenticated());
    assert_eq!(session.mention_count(), 0);
}

proptest! {
    #[test]
    fn test_root_lands_on_home(session in any_session()) {
        prop_assert_eq!(resolve("/", &session), Outcome::Redirect(HOME_PATH));
        prop_assert_eq!(resolve(HOME_PATH, &session), Outcome::Render(Page::Home));
    }

    #[test]
    fn test_only_admins_reach_user_list(session in any_session()) {
        let outcome = resolve("/user/all", &session);
        if session.has_role(ADMIN_ROLE) {
            prop_assert_eq!(outcome, Outcome::Render(Page::AllUsers));
        } else {
            prop_assert_eq!(outcome, Outcome::Redirect(HOME_PATH));
        }
    }

    #[test]
    fn test_subreddit_names_are_captured(name in "[a-z][a-z0-9_]{2,20}") {
        prop_assume!(name != "all" && name != "create");
        let path = format!("/subreddit/{name}");
        prop_assert_eq!(
            resolve(&path, &Session::anonymous()),
            Outcome::Render(Page::SubredditPosts { subreddit: name.clone() })
        );
    }

    #[test]
    fn test_unknown_top_level_paths_are_not_found(
        head in "[a-z]{1,12}",
        session in any_session(),
    ) {
        prop_assume!(!["login", "signup", "user", "subreddit", "post", "home"].contains(&head.as_str()));
        prop_assert_eq!(resolve(&format!("/{head}"), &session), Outcome::NotFound);
    }
}

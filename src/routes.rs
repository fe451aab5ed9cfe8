//! Client-side route table and the authorization gate.
//!
//! Every route is a row in [`ROUTES`]: path patterns, exact or prefix
//! matching, an optional guard over the [`Session`], the redirect used when
//! the guard fails, and the page it renders. [`resolve`] is the only place the
//! table is evaluated, so the whole access policy can be read in one screen.

use crate::config::{ADMIN_ROLE, HOME_PATH};
use crate::models::Session;

/// Page a path resolves to, with its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    AllUsers,
    SubredditCreate,
    PostCreate,
    Mentions,
    PostDetails { id: String },
    Home,
    UserPosts { username: String, listing: UserListing },
    UserComments { username: String },
    SubredditList,
    SubredditPosts { subreddit: String },
}

/// Which posts a user page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListing {
    Posts,
    Upvoted,
    Downvoted,
}

/// Result of running a path through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(Page),
    Redirect(&'static str),
    /// Guard failed and the route has no redirect configured.
    Blank,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// The path must have exactly the pattern's segments.
    Exact,
    /// The pattern must match the leading segments of the path.
    Prefix,
}

pub type Guard = fn(&Session) -> bool;

/// Parameters captured from `:name` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn get(&self, name: &str) -> &str {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map_or("", |(_, value)| value.as_str())
    }
}

#[derive(Clone, Copy)]
pub struct Route {
    pub patterns: &'static [&'static str],
    pub matching: Match,
    pub guard: Option<Guard>,
    pub redirect: Option<&'static str>,
    pub page: fn(&Params) -> Page,
}

impl Route {
    /// Params of the first pattern matching `segments`.
    pub fn matches(&self, segments: &[&str]) -> Option<Params> {
        self.patterns
            .iter()
            .find_map(|pattern| match_pattern(pattern, segments, self.matching))
    }

    /// Decide what a matched route does for this session.
    pub fn gate(&self, params: &Params, session: &Session) -> Outcome {
        match self.guard {
            Some(allowed) if !allowed(session) => {
                self.redirect.map_or(Outcome::Blank, Outcome::Redirect)
            }
            _ => Outcome::Render((self.page)(params)),
        }
    }
}

fn anonymous_only(session: &Session) -> bool {
    !session.is_authenticated()
}

fn signed_in(session: &Session) -> bool {
    session.is_authenticated()
}

fn admin_only(session: &Session) -> bool {
    session.is_authenticated() && session.has_role(ADMIN_ROLE)
}

fn login(_: &Params) -> Page {
    Page::Login
}

fn signup(_: &Params) -> Page {
    Page::Signup
}

fn all_users(_: &Params) -> Page {
    Page::AllUsers
}

fn subreddit_create(_: &Params) -> Page {
    Page::SubredditCreate
}

fn post_create(_: &Params) -> Page {
    Page::PostCreate
}

fn mentions(_: &Params) -> Page {
    Page::Mentions
}

fn post_details(params: &Params) -> Page {
    Page::PostDetails {
        id: params.get("id").to_string(),
    }
}

fn home(_: &Params) -> Page {
    Page::Home
}

fn user_listing(params: &Params, listing: UserListing) -> Page {
    Page::UserPosts {
        username: params.get("username").to_string(),
        listing,
    }
}

fn user_posts(params: &Params) -> Page {
    user_listing(params, UserListing::Posts)
}

fn user_upvoted(params: &Params) -> Page {
    user_listing(params, UserListing::Upvoted)
}

fn user_downvoted(params: &Params) -> Page {
    user_listing(params, UserListing::Downvoted)
}

fn user_comments(params: &Params) -> Page {
    Page::UserComments {
        username: params.get("username").to_string(),
    }
}

fn subreddit_list(_: &Params) -> Page {
    Page::SubredditList
}

fn subreddit_posts(params: &Params) -> Page {
    Page::SubredditPosts {
        subreddit: params.get("subreddit").to_string(),
    }
}

const fn open(patterns: &'static [&'static str], matching: Match, page: fn(&Params) -> Page) -> Route {
    Route {
        patterns,
        matching,
        guard: None,
        redirect: None,
        page,
    }
}

const fn guarded(
    pattern: &'static [&'static str],
    guard: Guard,
    redirect: &'static str,
    page: fn(&Params) -> Page,
) -> Route {
    Route {
        patterns: pattern,
        matching: Match::Prefix,
        guard: Some(guard),
        redirect: Some(redirect),
        page,
    }
}

/// Application routes in match order. Guarded and literal routes come before
/// the parameterised ones that would otherwise shadow them.
pub const ROUTES: &[Route] = &[
    guarded(&["/login"], anonymous_only, HOME_PATH, login),
    guarded(&["/signup"], anonymous_only, HOME_PATH, signup),
    guarded(&["/user/all"], admin_only, HOME_PATH, all_users),
    guarded(&["/subreddit/create"], signed_in, HOME_PATH, subreddit_create),
    guarded(&["/post/create"], signed_in, HOME_PATH, post_create),
    guarded(&["/user/mentions"], signed_in, HOME_PATH, mentions),
    open(&["/post/:id"], Match::Prefix, post_details),
    open(&["/home"], Match::Exact, home),
    open(&["/user/:username", "/user/:username/posts"], Match::Exact, user_posts),
    open(&["/user/:username/comments"], Match::Prefix, user_comments),
    open(&["/user/:username/upvoted"], Match::Prefix, user_upvoted),
    open(&["/user/:username/downvoted"], Match::Prefix, user_downvoted),
    open(&["/subreddit/all"], Match::Prefix, subreddit_list),
    open(&["/subreddit/:subreddit"], Match::Prefix, subreddit_posts),
];

/// Non-empty segments of a path, ignoring any query string or fragment.
pub fn segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, path: &[&str], matching: Match) -> Option<Params> {
    let pattern = segments(pattern);
    let fits = match matching {
        Match::Exact => path.len() == pattern.len(),
        Match::Prefix => path.len() >= pattern.len(),
    };
    if !fits {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern.into_iter().zip(path) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name, (*actual).to_string()));
        } else if !expected.eq_ignore_ascii_case(actual) {
            return None;
        }
    }
    Some(Params(params))
}

/// Resolve a path against the application table.
pub fn resolve(path: &str, session: &Session) -> Outcome {
    resolve_in(ROUTES, path, session)
}

/// The gate: root redirects home unconditionally, then the first matching
/// route decides, and anything unmatched is not found.
pub fn resolve_in(routes: &[Route], path: &str, session: &Session) -> Outcome {
    let segments = segments(path);
    if segments.is_empty() {
        return Outcome::Redirect(HOME_PATH);
    }

    routes
        .iter()
        .find_map(|route| route.matches(&segments).map(|params| route.gate(&params, session)))
        .unwrap_or(Outcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn signed_in_as(roles: &[&str]) -> Session {
        Session::authenticated(User {
            id: "1".to_string(),
            username: "alice".to_string(),
            roles: roles.iter().map(ToString::to_string).collect(),
        })
    }

    #[test]
    fn segments_ignore_slashes_query_and_fragment() {
        assert_eq!(segments("/user//bob/?tab=1#top"), vec!["user", "bob"]);
        assert!(segments("/").is_empty());
        assert!(segments("").is_empty());
    }

    #[test]
    fn exact_route_rejects_sub_paths() {
        let anon = Session::anonymous();
        assert_eq!(resolve("/home", &anon), Outcome::Render(Page::Home));
        assert_eq!(resolve("/home/", &anon), Outcome::Render(Page::Home));
        assert_eq!(resolve("/home/extra", &anon), Outcome::NotFound);
    }

    #[test]
    fn prefix_route_accepts_sub_paths() {
        let anon = Session::anonymous();
        assert_eq!(
            resolve("/post/42/some-slug", &anon),
            Outcome::Render(Page::PostDetails {
                id: "42".to_string()
            })
        );
        assert_eq!(resolve("/subreddit/all/x", &anon), Outcome::Render(Page::SubredditList));
    }

    #[test]
    fn literal_segments_are_case_insensitive() {
        let anon = Session::anonymous();
        assert_eq!(resolve("/HOME", &anon), Outcome::Render(Page::Home));
        assert_eq!(
            resolve("/User/Bob", &anon),
            Outcome::Render(Page::UserPosts {
                username: "Bob".to_string(),
                listing: UserListing::Posts
            })
        );
    }

    #[test]
    fn user_routes() {
        let anon = Session::anonymous();
        let posts = Outcome::Render(Page::UserPosts {
            username: "bob".to_string(),
            listing: UserListing::Posts,
        });
        assert_eq!(resolve("/user/bob", &anon), posts);
        assert_eq!(resolve("/user/bob/posts", &anon), posts);
        assert_eq!(resolve("/user/bob/posts/more", &anon), Outcome::NotFound);
        assert_eq!(
            resolve("/user/bob/comments", &anon),
            Outcome::Render(Page::UserComments {
                username: "bob".to_string()
            })
        );
        assert_eq!(
            resolve("/user/bob/downvoted", &anon),
            Outcome::Render(Page::UserPosts {
                username: "bob".to_string(),
                listing: UserListing::Downvoted
            })
        );
    }

    #[test]
    fn literal_routes_shadow_parameterised_ones() {
        let user = signed_in_as(&["USER"]);
        assert_eq!(resolve("/post/create", &user), Outcome::Render(Page::PostCreate));
        assert_eq!(resolve("/subreddit/create", &user), Outcome::Render(Page::SubredditCreate));
        assert_eq!(resolve("/user/mentions", &user), Outcome::Render(Page::Mentions));
    }

    #[test]
    fn login_and_signup_only_for_anonymous() {
        let anon = Session::anonymous();
        let user = signed_in_as(&["USER"]);
        assert_eq!(resolve("/login", &anon), Outcome::Render(Page::Login));
        assert_eq!(resolve("/signup", &anon), Outcome::Render(Page::Signup));
        assert_eq!(resolve("/login", &user), Outcome::Redirect(HOME_PATH));
        assert_eq!(resolve("/signup", &user), Outcome::Redirect(HOME_PATH));
    }

    #[test]
    fn guard_without_redirect_renders_nothing() {
        let table = [Route {
            patterns: &["/secret"],
            matching: Match::Prefix,
            guard: Some(signed_in),
            redirect: None,
            page: home,
        }];
        assert_eq!(
            resolve_in(&table, "/secret", &Session::anonymous()),
            Outcome::Blank
        );
        assert_eq!(
            resolve_in(&table, "/secret", &signed_in_as(&[])),
            Outcome::Render(Page::Home)
        );
    }

    #[test]
    fn empty_table_is_not_found_except_root() {
        let anon = Session::anonymous();
        assert_eq!(resolve_in(&[], "/home", &anon), Outcome::NotFound);
        assert_eq!(resolve_in(&[], "/", &anon), Outcome::Redirect(HOME_PATH));
    }

    #[test]
    fn missing_param_reads_as_empty() {
        assert_eq!(Params::default().get("id"), "");
    }
}

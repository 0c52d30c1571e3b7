//! Server-rendered landing page.
//!
//! The template is compiled into the binary and parsed once at startup, so a
//! broken template stops the process before it starts serving.

use minijinja::{context, Environment};

use crate::features::identity::ActingUser;

const INDEX_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");

pub struct LandingPage {
    env: Environment<'static>,
}

impl LandingPage {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the page for the acting user. Display only, not an access check.
    pub fn render(&self, user: &ActingUser) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_NAME)?.render(context! {
            user => user.user,
            is_admin => user.is_admin(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_regular_user() {
        let page = LandingPage::new().unwrap();
        let html = page.render(&ActingUser::new("alice")).unwrap();

        assert!(html.contains("Signed in as <strong>alice</strong>"));
        assert!(!html.contains("class=\"badge\""));
    }

    #[test]
    fn test_render_admin_badge() {
        let page = LandingPage::new().unwrap();
        let html = page.render(&ActingUser::new("admin")).unwrap();

        assert!(html.contains("class=\"badge\""));
    }

    #[test]
    fn test_render_escapes_identity() {
        let page = LandingPage::new().unwrap();
        let html = page.render(&ActingUser::new("<script>")).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

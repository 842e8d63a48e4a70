use super::escape_html;
use crate::models::rank::RankResult;

pub const SUBMIT_LABEL: &str = "Get Rank";
pub const BUSY_LABEL: &str = "Searching...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankSearch {
    pub user_id: String,
    pub result: Option<RankResult>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RankSearch {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// The identifier that would be requested, if submitting is allowed at all.
    pub fn query(&self) -> Option<&str> {
        let user_id = self.user_id.trim();
        if self.loading || user_id.is_empty() {
            None
        } else {
            Some(user_id)
        }
    }

    pub fn can_submit(&self) -> bool {
        self.query().is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn render_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("error: {error}");
        }
        match &self.result {
            Some(result) => result.display_lines().join("\n"),
            None => String::new(),
        }
    }

    /// The search form followed by the error or the result, `action` being the form target.
    pub fn render_html(&self, action: &str) -> String {
        let disabled = if self.loading { " disabled" } else { "" };
        let mut out = format!(
            r#"<form method="get" action="{}">
<input type="text" name="user_id" placeholder="Enter User ID" value="{}" required>
<button type="submit"{}>{}</button>
</form>"#,
            escape_html(action),
            escape_html(&self.user_id),
            disabled,
            self.button_label(),
        );

        if let Some(error) = &self.error {
            out.push_str(&format!(
                "\n<div class=\"error\">{}</div>",
                escape_html(error)
            ));
        }
        if let Some(result) = &self.result {
            let [user_id, rank, score] = result.display_lines();
            out.push_str(&format!(
                "\n<div class=\"result\">{}<br>\n{}<br>\n{}</div>",
                escape_html(&user_id),
                escape_html(&rank),
                escape_html(&score),
            ));
        }
        out
    }
}

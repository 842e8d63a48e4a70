use crate::{repositories::ranking::RankingApi, views::rank_search::RankSearch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty identifier or a search already in flight; nothing was requested.
    Ignored,
    Found,
    Failed,
}

pub async fn submit(search: &mut RankSearch, api: &dyn RankingApi) -> SubmitOutcome {
    let user_id = match search.query() {
        Some(user_id) => user_id.to_string(),
        None => return SubmitOutcome::Ignored,
    };

    search.loading = true;
    search.error = None;
    search.result = None;

    let outcome = match api.fetch_rank(&user_id).await {
        Ok(result) => {
            search.result = Some(result);
            SubmitOutcome::Found
        }
        Err(e) => {
            search.error = Some(e.user_feedback);
            SubmitOutcome::Failed
        }
    };

    search.loading = false;
    outcome
}

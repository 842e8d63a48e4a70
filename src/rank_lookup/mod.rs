use std::io::{BufRead, Write};

use crate::{
    context::Context,
    usecases::{self, ranks::SubmitOutcome},
    views::rank_search::RankSearch,
};

fn rank_user_id_from_input<R: BufRead, W: Write>(
    mut input: R,
    mut prompt: W,
) -> anyhow::Result<String> {
    write!(prompt, "Enter User ID: ")?;
    prompt.flush()?;

    let mut user_id = String::new();
    input.read_line(&mut user_id)?;

    writeln!(prompt)?;
    prompt.flush()?;

    Ok(user_id.trim().to_string())
}

fn retrieve_rank_user_id(ctx: &Context) -> anyhow::Result<String> {
    match &ctx.config.rank_user_id {
        Some(user_id) if !user_id.trim().is_empty() => Ok(user_id.clone()),
        _ => rank_user_id_from_input(std::io::stdin().lock(), std::io::stdout()),
    }
}

/// One-shot rank search printed to stdout.
pub async fn serve(ctx: Context) -> anyhow::Result<()> {
    let mut search = RankSearch::new(retrieve_rank_user_id(&ctx)?);

    match usecases::ranks::submit(&mut search, ctx.ranking.as_ref()).await {
        SubmitOutcome::Ignored => anyhow::bail!("no user ID given"),
        SubmitOutcome::Found => {
            log::info!(user_id = search.user_id.trim(); "Looked up rank");
        }
        SubmitOutcome::Failed => {}
    }

    println!("{}", search.render_text());
    Ok(())
}

use crate::components::{FundingRoundCard, ImpactMetric, ProposalCard};
use crate::funding::{
    load_governance_data, proposals_with_status, FundingRound, GovernanceData, GovernanceStats,
    ProposalStatus, RoundBoard,
};
use leptos::*;

fn governance_view(data: GovernanceData) -> impl IntoView {
    let stats = GovernanceStats::collect(&data.proposals, &data.funding_rounds);
    let active = proposals_with_status(&data.proposals, ProposalStatus::Active);
    let completed = proposals_with_status(&data.proposals, ProposalStatus::Completed);
    let board = RoundBoard::from_rounds(&data.funding_rounds);

    let active_view = if active.is_empty() {
        view! {
            <div class="card empty-state">
                <h3>"No Active Proposals"</h3>
                <p>"There are currently no active proposals to vote on."</p>
            </div>
        }
        .into_view()
    } else {
        active
            .into_iter()
            .map(|p| view! { <ProposalCard proposal=p/> })
            .collect_view()
    };

    let completed_view = completed
        .into_iter()
        .map(|p| view! { <ProposalCard proposal=p show_voting_buttons=false/> })
        .collect_view();

    let active_round = board.active.map(|round| {
        view! {
            <div class="round-group">
                <h3>"Active Round"</h3>
                <FundingRoundCard round=round/>
            </div>
        }
    });

    let compact_group = |heading: &'static str, rounds: Vec<FundingRound>| {
        (!rounds.is_empty()).then(|| {
            let cards = rounds
                .into_iter()
                .map(|round| view! { <FundingRoundCard round=round compact=true/> })
                .collect_view();
            view! {
                <div class="round-group">
                    <h3>{heading}</h3>
                    {cards}
                </div>
            }
        })
    };
    let upcoming_rounds = compact_group("Upcoming Rounds", board.upcoming);
    let past_rounds = compact_group("Past Rounds", board.completed);

    view! {
        <main class="container governance-page">
            <header class="page-header">
                <h1>"Community Governance"</h1>
                <p class="tagline">
                    "Sustained Aachen is governed by its community through transparent proposals "
                    "and participatory decision-making."
                </p>
            </header>

            <div class="governance-layout">
                <section class="proposals">
                    <h2>"Active Proposals"</h2>
                    {active_view}
                    <h2>"Recently Completed Proposals"</h2>
                    {completed_view}
                </section>

                <aside class="funding-rounds">
                    <h2>"Funding Rounds"</h2>
                    {active_round}
                    {upcoming_rounds}
                    {past_rounds}
                </aside>
            </div>

            <section class="governance-stats">
                <h2>"Governance Statistics"</h2>
                <div class="card-row">
                    <ImpactMetric title="Total Proposals" value=stats.total_proposals.to_string()/>
                    <ImpactMetric title="Active Proposals" value=stats.active_proposals.to_string()/>
                    <ImpactMetric title="Funding Rounds" value=stats.funding_rounds.to_string()/>
                    <ImpactMetric title="Implemented Proposals" value=stats.implemented_proposals.to_string()/>
                </div>
            </section>
        </main>
    }
}

#[component]
pub fn GovernancePage() -> impl IntoView {
    load_governance_data()
        .map(governance_view)
        .map_err(|e| {
            log::error!("Governance page unavailable: {}", e);
            e
        })
}

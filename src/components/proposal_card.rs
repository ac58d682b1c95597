use crate::components::ClientDate;
use crate::funding::{Proposal, ProposalResult, ProposalStatus};
use leptos::*;

#[component]
fn VoteCount(count: u32, label: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("vote-count {}", tone)>
            <p class="vote-number">{count}</p>
            <p class="vote-label">{label}</p>
        </div>
    }
}

#[component]
pub fn ProposalCard(
    proposal: Proposal,
    #[prop(default = true)] show_voting_buttons: bool,
) -> impl IntoView {
    let votes = proposal.votes;
    let approval = votes.approval_percent();
    let category_class = proposal.category_class();

    let outcome = match proposal.status {
        ProposalStatus::Active => view! {
            <span>"Voting ends on " <ClientDate date=proposal.voting_ends/></span>
        }
        .into_view(),
        ProposalStatus::Completed => {
            let (class, label) = match proposal.result {
                Some(ProposalResult::Approved) => ("outcome approved", "Approved"),
                Some(ProposalResult::Rejected) => ("outcome rejected", "Rejected"),
                None => ("outcome", "Closed"),
            };
            view! { <span class=class>{label}</span> }.into_view()
        }
    };

    let implementation = proposal.implementation.map(|state| {
        view! { <p class="implementation">"Implementation: " {state.label()}</p> }
    });

    let tags = proposal
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    let voting = (show_voting_buttons && proposal.status == ProposalStatus::Active).then(|| {
        view! {
            <div class="vote-actions">
                <button class="button vote-for">"Vote For"</button>
                <button class="button vote-against">"Vote Against"</button>
                <button class="button vote-abstain">"Abstain"</button>
            </div>
        }
    });

    view! {
        <div class="card proposal-card">
            <div class="card-header">
                <h3>{proposal.title}</h3>
                <span class=category_class>{proposal.category}</span>
            </div>
            <p class="proposal-description">{proposal.description}</p>

            <div class="proposal-meta">
                <span>"Proposed by " {proposal.creator}</span>
                <span class="separator">"\u{2022}"</span>
                <span>"Created on " <ClientDate date=proposal.date_created/></span>
                <span class="separator">"\u{2022}"</span>
                {outcome}
            </div>

            <div class="vote-grid">
                <VoteCount count=votes.in_favor label="For" tone="for"/>
                <VoteCount count=votes.against label="Against" tone="against"/>
                <VoteCount count=votes.abstain label="Abstain" tone="abstain"/>
            </div>

            <div class="approval">
                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {}%", approval)></div>
                </div>
                <p class="approval-caption">
                    {format!("{}% approval \u{00B7} {} votes", approval, votes.total())}
                </p>
            </div>

            {implementation}
            <div class="tags">{tags}</div>
            {voting}
        </div>
    }
}

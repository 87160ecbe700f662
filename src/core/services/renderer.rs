//! Export renderer - turns cards into Markdown
//!
//! Each card is rendered as a fixed sequence of sections:
//!
//! ```text
//! #### **{last activity}** [{name}]({url})      always
//! ##### `label` ... - **[member, ...]**         show_labels_and_members
//! {description}                                 show_description
//! [{attachment}]({url}) / ![]({url})            show_attachments
//! {checklist} / - [x] item                      show_checklists
//! > **{date}** - **{author}:** / > body         show_comments
//! ```
//!
//! Sub-resources are fetched only for enabled sections, and the first failed
//! fetch aborts the whole render. Anything already written stays written.

use std::io::Write;

use chrono::{DateTime, FixedOffset};
use log::debug;

use crate::core::models::{
    Action, Attachment, Card, CheckItem, Checklist, DATE_FORMAT, ExportOptions, parse_timestamp,
};
use crate::core::ports::TrelloApi;
use crate::error::Result;

/// Sort cards ascending by last activity.
///
/// Every timestamp is parsed before anything is reordered; one bad value
/// fails the whole list. Cards with equal timestamps keep Trello order.
pub fn sort_cards(cards: Vec<Card>) -> Result<Vec<Card>> {
    sort_by_timestamp(cards, |card| card.date_last_activity.as_str())
}

/// Keep only comment actions, oldest first
pub fn comment_actions(actions: Vec<Action>) -> Result<Vec<Action>> {
    let comments = actions.into_iter().filter(Action::is_comment).collect();
    sort_by_timestamp(comments, |action| action.date.as_str())
}

fn sort_by_timestamp<T>(items: Vec<T>, timestamp: impl Fn(&T) -> &str) -> Result<Vec<T>> {
    let mut keyed = items
        .into_iter()
        .map(|item| -> Result<(DateTime<FixedOffset>, T)> {
            Ok((parse_timestamp(timestamp(&item))?, item))
        })
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Render a check item as a Markdown task line
#[must_use]
pub fn format_check_item(item: &CheckItem) -> String {
    let mark = if item.is_complete() { 'x' } else { ' ' };
    format!("- [{mark}] {}", item.name)
}

/// Continue a block quote across every line of a comment body
#[must_use]
pub fn quote_comment_body(body: &str) -> String {
    body.replace('\n', "\n> ")
}

/// Render cards in the order given
pub fn render_cards<A, W>(api: &A, out: &mut W, cards: &[Card], options: ExportOptions) -> Result<()>
where
    A: TrelloApi + ?Sized,
    W: Write + ?Sized,
{
    for card in cards {
        render_card(api, out, card, options)?;
    }
    Ok(())
}

/// Render one card, fetching only the sub-resources its enabled sections need
pub fn render_card<A, W>(api: &A, out: &mut W, card: &Card, options: ExportOptions) -> Result<()>
where
    A: TrelloApi + ?Sized,
    W: Write + ?Sized,
{
    debug!("rendering card {} ({})", card.name, card.id);
    let last_activity = card.last_activity()?;
    writeln!(
        out,
        "#### **{}** [{}]({})",
        last_activity.format(DATE_FORMAT),
        card.name,
        card.url
    )?;

    if options.show_labels_and_members {
        render_labels_and_members(api, out, card)?;
    }

    if options.show_description {
        writeln!(out, "{}\n", card.desc)?;
    }

    if options.show_attachments {
        for attachment in api.card_attachments(&card.id)? {
            render_attachment(out, &attachment)?;
        }
    }

    if options.show_checklists {
        for checklist in api.card_checklists(&card.id)? {
            render_checklist(out, &checklist)?;
        }
    }

    if options.show_comments {
        for comment in comment_actions(api.card_actions(&card.id)?)? {
            render_comment(out, &comment)?;
        }
    }

    Ok(())
}

fn render_labels_and_members<A, W>(api: &A, out: &mut W, card: &Card) -> Result<()>
where
    A: TrelloApi + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "##### ")?;
    for label in &card.labels {
        write!(out, "`{}` ", label.name)?;
    }

    let members = api.card_members(&card.id)?;
    let names: Vec<&str> = members.iter().map(|m| m.full_name.as_str()).collect();
    writeln!(out, "- **[{}]**", names.join(", "))?;
    Ok(())
}

fn render_attachment<W: Write + ?Sized>(out: &mut W, attachment: &Attachment) -> Result<()> {
    writeln!(out, "[{}]({})", attachment.name, attachment.url)?;
    writeln!(out, "![]({})\n", attachment.url)?;
    Ok(())
}

fn render_checklist<W: Write + ?Sized>(out: &mut W, checklist: &Checklist) -> Result<()> {
    writeln!(out, "{}", checklist.name)?;
    for item in &checklist.check_items {
        writeln!(out, "{}", format_check_item(item))?;
    }
    writeln!(out)?;
    Ok(())
}

fn render_comment<W: Write + ?Sized>(out: &mut W, comment: &Action) -> Result<()> {
    let at = comment.timestamp()?;
    writeln!(
        out,
        "> **{}** - **{}:**",
        at.format(DATE_FORMAT),
        comment.member_creator.full_name
    )?;
    writeln!(out, "> {}\n", quote_comment_body(&comment.data.text))?;
    Ok(())
}

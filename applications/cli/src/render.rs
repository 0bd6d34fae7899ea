//! Plain-text rendering for terminal output.

use illuminate_catalog::{AwesomeRepo, Category};
use illuminate_client::{
    GrowthProfile, Issue, IssueComment, IssueFeed, IssueProgress, JobStatus, NotificationList,
    User,
};
use illuminate_ui::ThemeId;
use std::fmt::Write;

pub fn difficulty_label(difficulty: u8) -> &'static str {
    match difficulty {
        1 => "beginner",
        2 => "intermediate",
        3 => "advanced",
        _ => "unrated",
    }
}

pub fn user(user: &User) -> String {
    let mut out = format!("{} ({})", user.github_username, user.id);
    if user.is_admin() {
        out.push_str(" [admin]");
    }
    if !user.skills.is_empty() {
        let skills: Vec<&str> = user.skills.iter().map(|s| s.language.as_str()).collect();
        let _ = write!(out, "\nskills: {}", skills.join(", "));
    }
    out
}

pub fn issue_line(issue: &Issue) -> String {
    let mut out = format!(
        "{}  [{}] #{} {}",
        issue.id,
        difficulty_label(issue.difficulty),
        issue.number,
        issue.title
    );
    if let Some(repo) = &issue.repo {
        let _ = write!(out, "  ({})", repo.full_name());
    }
    if let Some(score) = issue.match_score {
        let _ = write!(out, "  match {:.0}%", score * 100.0);
    }
    out
}

pub fn feed(feed: &IssueFeed) -> String {
    if feed.issues.is_empty() {
        return "No issues found.".to_string();
    }

    let mut out = String::new();
    for issue in &feed.issues {
        out.push_str(&issue_line(issue));
        out.push('\n');
    }
    let _ = write!(
        out,
        "page {} ({} per page), {} total",
        feed.page, feed.per_page, feed.total_count
    );
    out
}

pub fn issue_detail(issue: &Issue, comments: &[IssueComment]) -> String {
    let mut out = issue_line(issue);
    if !issue.summary.is_empty() {
        let _ = write!(out, "\n\n{}", issue.summary);
    }
    if !issue.labels.is_empty() {
        let _ = write!(out, "\nlabels: {}", issue.labels.join(", "));
    }
    if !issue.time_estimate.is_empty() {
        let _ = write!(out, "\nestimate: {}", issue.time_estimate);
    }
    for comment in comments {
        let _ = write!(out, "\n\n@{}: {}", comment.user.login, comment.body.trim());
    }
    out
}

pub fn progress(progress: Option<&IssueProgress>) -> String {
    match progress {
        Some(p) => {
            let mut out = format!("status: {}", p.status.as_str());
            for note in &p.notes {
                let _ = write!(out, "\n- {}", note);
            }
            out
        }
        None => "Not tracking this issue.".to_string(),
    }
}

pub fn notifications(list: &NotificationList) -> String {
    let mut out = format!("{} unread of {}", list.unread_count, list.total_count);
    for n in &list.notifications {
        let marker = if n.read { ' ' } else { '*' };
        let _ = write!(out, "\n{} {}  {}: {}", marker, n.id, n.title, n.message);
    }
    out
}

pub fn growth(growth: &GrowthProfile) -> String {
    let mut out = format!("level: {}", growth.level.display_name());
    if let Some(next) = growth.next_level {
        let _ = write!(
            out,
            "\nnext: {} ({}/{} {}, {}%)",
            next.display_name(),
            growth.progress.current_value,
            growth.progress.target_value,
            growth.progress.metric,
            growth.progress.percentage
        );
    }
    for step in &growth.next_steps {
        let _ = write!(out, "\n- {}: {}", step.title, step.description);
    }
    out
}

pub fn job(job: &JobStatus) -> String {
    let mut out = format!("{} {} {}", job.kind, job.id, job.status);
    if !job.progress.is_empty() {
        let _ = write!(out, " ({})", job.progress);
    }
    if let Some(error) = &job.error {
        let _ = write!(out, " error: {}", error);
    }
    out
}

pub fn catalog_entry(category: &Category, repo: &AwesomeRepo) -> String {
    format!(
        "{:<40} {:>6}  {:<12} [{}] {}",
        repo.full_name(),
        repo.stars,
        repo.language,
        category.id,
        repo.description
    )
}

pub fn theme_line(theme: ThemeId, current: ThemeId) -> String {
    let marker = if theme == current { '*' } else { ' ' };
    format!("{} {:<8} {:<8} {}", marker, theme.id(), theme.label(), theme.accent())
}

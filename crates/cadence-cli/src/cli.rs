//! Subcommand arguments and their handlers.
//!
//! Argument structs carry clap derives and convert into core types
//! (`DraftEdit`, `SuggestionPatch`, `ViewFilter`) so that the core stays
//! free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Types → ContentCalendar
//! ```

use anyhow::{bail, Context, Result};
use cadence_core::{
    display::{
        CreateResult, DismissResult, FieldErrorList, Items, OperationStatus, Suggestions,
        UpdateResult,
    },
    CalendarError, ContentCalendar, ContentType, DraftEdit, DraftStatus, ItemStatus, MonthStep,
    Platform, Priority, RefreshOutcome, RefreshReport, SubmitOutcome, SuggestionOutcome,
    SuggestionPatch, ViewFilter,
};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;

use crate::renderer::TerminalRenderer;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Instagram,
    Facebook,
    Tiktok,
    Linkedin,
}

impl From<PlatformArg> for Platform {
    fn from(val: PlatformArg) -> Self {
        match val {
            PlatformArg::Instagram => Platform::Instagram,
            PlatformArg::Facebook => Platform::Facebook,
            PlatformArg::Tiktok => Platform::Tiktok,
            PlatformArg::Linkedin => Platform::Linkedin,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ContentTypeArg {
    Post,
    Reel,
    Carousel,
    Story,
}

impl From<ContentTypeArg> for ContentType {
    fn from(val: ContentTypeArg) -> Self {
        match val {
            ContentTypeArg::Post => ContentType::Post,
            ContentTypeArg::Reel => ContentType::Reel,
            ContentTypeArg::Carousel => ContentType::Carousel,
            ContentTypeArg::Story => ContentType::Story,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Statuses a new draft may start in
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DraftStatusArg {
    Draft,
    Scheduled,
}

impl From<DraftStatusArg> for DraftStatus {
    fn from(val: DraftStatusArg) -> Self {
        match val {
            DraftStatusArg::Draft => DraftStatus::Draft,
            DraftStatusArg::Scheduled => DraftStatus::Scheduled,
        }
    }
}

/// Item statuses accepted by view filters
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ItemStatusArg {
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl From<ItemStatusArg> for ItemStatus {
    fn from(val: ItemStatusArg) -> Self {
        match val {
            ItemStatusArg::Draft => ItemStatus::Draft,
            ItemStatusArg::Scheduled => ItemStatus::Scheduled,
            ItemStatusArg::Published => ItemStatus::Published,
            ItemStatusArg::Failed => ItemStatus::Failed,
        }
    }
}

/// Select the month to show and narrow the items placed on it
#[derive(Args, Default)]
pub struct MonthArgs {
    /// Months away from the current one, negative for the past
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
    /// Only place items for this platform
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
    /// Only place items in this status
    #[arg(long, value_enum)]
    pub status: Option<ItemStatusArg>,
}

impl From<&MonthArgs> for ViewFilter {
    fn from(val: &MonthArgs) -> Self {
        ViewFilter {
            platform: val.platform.map(Into::into),
            status: val.status.map(Into::into),
        }
    }
}

/// List scheduled items
#[derive(Args)]
pub struct ListItemsArgs {
    /// Only the next N placed items from now, ascending
    #[arg(long)]
    pub upcoming: Option<usize>,
}

/// Draft a new item and submit it
///
/// Unset fields keep the defaults of a blank draft: Instagram, the next
/// quarter-hour slot at least 45 minutes from now, status draft.
#[derive(Args)]
pub struct CreateItemArgs {
    /// Title of the item
    pub title: String,
    #[arg(short, long, value_enum)]
    pub platform: Option<PlatformArg>,
    /// Publication date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Publication time, HH:MM
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long, value_enum)]
    pub content_type: Option<ContentTypeArg>,
    #[arg(long, value_enum)]
    pub status: Option<DraftStatusArg>,
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(long)]
    pub campaign: Option<String>,
}

impl From<CreateItemArgs> for Vec<DraftEdit> {
    fn from(val: CreateItemArgs) -> Self {
        let mut edits = vec![DraftEdit::Title(val.title)];
        if let Some(platform) = val.platform {
            edits.push(DraftEdit::Platform(
                Platform::from(platform).as_str().to_string(),
            ));
        }
        edits.extend(val.date.map(DraftEdit::Date));
        edits.extend(val.time.map(DraftEdit::Time));
        edits.extend(val.content_type.map(|c| DraftEdit::ContentType(c.into())));
        edits.extend(val.status.map(|s| DraftEdit::Status(s.into())));
        edits.extend(val.priority.map(|p| DraftEdit::Priority(p.into())));
        edits.extend(val.description.map(DraftEdit::Description));
        edits.extend(val.campaign.map(DraftEdit::Campaign));
        edits
    }
}

/// Field changes for a suggestion
#[derive(Args, Default)]
pub struct SuggestionFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long, value_enum)]
    pub platform: Option<PlatformArg>,
    /// New date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// New time, HH:MM
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(long)]
    pub reason: Option<String>,
}

impl From<SuggestionFieldArgs> for SuggestionPatch {
    fn from(val: SuggestionFieldArgs) -> Self {
        SuggestionPatch {
            title: val.title,
            description: val.description,
            platform: val
                .platform
                .map(|p| Platform::from(p).as_str().to_string()),
            date: val.date,
            time: val.time,
            priority: val.priority.map(Into::into),
            reason: val.reason,
        }
    }
}

/// Act on one suggestion, optionally editing it first
#[derive(Args)]
pub struct SuggestionEditArgs {
    /// ID of the suggestion
    pub id: String,
    #[command(flatten)]
    pub fields: SuggestionFieldArgs,
}

/// Dismiss a suggestion
#[derive(Args)]
pub struct DismissSuggestionArgs {
    /// ID of the suggestion
    pub id: String,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// List items in collection order, or the upcoming ones
    #[command(aliases = ["l", "ls"])]
    List(ListItemsArgs),
    /// Draft and submit a new item
    #[command(alias = "c")]
    Create(CreateItemArgs),
}

#[derive(Subcommand)]
pub enum SuggestionCommands {
    /// List pending suggestions
    #[command(aliases = ["l", "ls"])]
    List,
    /// Edit a suggestion and save it
    #[command(alias = "e")]
    Edit(SuggestionEditArgs),
    /// Convert a suggestion, with optional edits, into a scheduled item
    #[command(alias = "i")]
    Insert(SuggestionEditArgs),
    /// Dismiss a suggestion
    #[command(aliases = ["d", "rm"])]
    Dismiss(DismissSuggestionArgs),
    /// Reload suggestions from the dataset
    #[command(alias = "r")]
    Refresh,
}

/// Runs one command against a calendar and renders the result.
pub struct Cli {
    calendar: ContentCalendar,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(calendar: ContentCalendar, renderer: TerminalRenderer) -> Self {
        Self { calendar, renderer }
    }

    fn view(&self, args: &MonthArgs) -> Result<()> {
        self.calendar.set_filter(ViewFilter::from(args));
        if args.offset != 0 {
            self.calendar
                .go_to_month(MonthStep::Offset(args.offset))
                .context("Failed to change month")?;
        }
        Ok(())
    }

    pub fn show_month(&self, args: &MonthArgs) -> Result<()> {
        self.view(args)?;
        let grid = self
            .calendar
            .month_grid()
            .context("Failed to build month grid")?;
        self.renderer.render(&grid.to_string())
    }

    pub fn show_summary(&self, args: &MonthArgs) -> Result<()> {
        self.view(args)?;
        self.renderer.render(&self.calendar.summary().to_string())
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::List(args) => {
                let items = match args.upcoming {
                    Some(limit) => self.calendar.upcoming(limit),
                    None => self.calendar.items(),
                };
                self.renderer.render(&Items(items).to_string())
            }
            ItemCommands::Create(args) => {
                let edits: Vec<DraftEdit> = args.into();
                let form = self.calendar.draft().apply_all(edits);
                let outcome = match self.calendar.create_draft(form).await {
                    Err(CalendarError::Validation(errors)) => {
                        eprint!("{}", FieldErrorList(&errors));
                        bail!("Failed to create item: {errors}");
                    }
                    other => other.context("Failed to create item")?,
                };
                match outcome {
                    SubmitOutcome::Committed(item) => {
                        self.renderer.render(&CreateResult::new(item).to_string())
                    }
                    SubmitOutcome::Cancelled => self.renderer.render(
                        &OperationStatus::failure("Submission was cancelled".to_string())
                            .to_string(),
                    ),
                }
            }
        }
    }

    pub async fn handle_suggestion_command(&self, command: SuggestionCommands) -> Result<()> {
        match command {
            SuggestionCommands::List => self.list_suggestions(),
            SuggestionCommands::Edit(args) => {
                let patch = SuggestionPatch::from(args.fields);
                let changes = patch.describe();
                self.calendar
                    .edit_suggestion(&args.id, &patch)
                    .context("Failed to edit suggestion")?;
                let outcome = self
                    .calendar
                    .save_suggestion(&args.id)
                    .context("Failed to save suggestion")?;
                match outcome {
                    SuggestionOutcome::Done(saved) => self
                        .renderer
                        .render(&UpdateResult::with_changes(saved, changes).to_string()),
                    SuggestionOutcome::AlreadyResolved(_) => self.already_resolved(&args.id),
                }
            }
            SuggestionCommands::Insert(args) => {
                let patch = SuggestionPatch::from(args.fields);
                if !patch.is_empty() {
                    self.calendar
                        .edit_suggestion(&args.id, &patch)
                        .context("Failed to edit suggestion")?;
                }
                let outcome = self
                    .calendar
                    .insert_suggestion(&args.id)
                    .context("Failed to insert suggestion")?;
                match outcome {
                    SuggestionOutcome::Done(item) => {
                        let status = OperationStatus::success(format!(
                            "Inserted suggestion '{}' into the calendar",
                            args.id
                        ));
                        self.renderer.render(&format!(
                            "{status}\n{}",
                            CreateResult::new(item)
                        ))
                    }
                    SuggestionOutcome::AlreadyResolved(_) => self.already_resolved(&args.id),
                }
            }
            SuggestionCommands::Dismiss(args) => {
                let outcome = self
                    .calendar
                    .dismiss_suggestion(&args.id)
                    .context("Failed to dismiss suggestion")?;
                match outcome {
                    SuggestionOutcome::Done(suggestion) => self
                        .renderer
                        .render(&DismissResult::new(suggestion).to_string()),
                    SuggestionOutcome::AlreadyResolved(_) => self.already_resolved(&args.id),
                }
            }
            SuggestionCommands::Refresh => {
                match self
                    .calendar
                    .refresh_suggestions()
                    .context("Failed to start refresh")?
                {
                    RefreshOutcome::Started(handle) => {
                        let report = handle.wait().await.context("Refresh failed")?;
                        debug!("Refresh finished: {report:?}");
                        if report == RefreshReport::Cancelled {
                            return self.renderer.render(
                                &OperationStatus::failure("Refresh was cancelled".to_string())
                                    .to_string(),
                            );
                        }
                    }
                    RefreshOutcome::AlreadyInFlight => debug!("Refresh already in flight"),
                }
                self.list_suggestions()
            }
        }
    }

    fn list_suggestions(&self) -> Result<()> {
        self.renderer
            .render(&Suggestions(self.calendar.suggestions()).to_string())
    }

    fn already_resolved(&self, id: &str) -> Result<()> {
        self.renderer.render(
            &OperationStatus::failure(format!("Suggestion '{id}' was already resolved"))
                .to_string(),
        )
    }
}

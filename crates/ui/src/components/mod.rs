mod exercise_grid;
mod markdown_panel;
mod module_layout;
mod progress_tracker;
mod tab_navigation;
mod table_panel;

pub use exercise_grid::ExerciseGrid;
pub use markdown_panel::MarkdownPanel;
pub use module_layout::ModuleLayout;
pub use progress_tracker::ProgressTracker;
pub use tab_navigation::TabNavigation;
pub use table_panel::TablePanel;

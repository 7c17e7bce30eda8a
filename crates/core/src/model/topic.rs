use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::action::ActionSpec;

/// Identifier of a practice topic.
///
/// The set is closed: progress records for anything else are rejected at the
/// store boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicId {
    Locators,
    RelativeLocators,
    ShadowDom,
    Tables,
    Forms,
    Calendar,
    Slider,
    Alerts,
    KeyboardActions,
    MouseActions,
    Hover,
    DragDrop,
    FileUpload,
    DownloadFile,
    BrokenImage,
    Waits,
    Windows,
    Iframes,
    EndToEnd,
}

impl TopicId {
    /// Every topic, in catalog order.
    pub const ALL: [TopicId; 19] = [
        TopicId::Locators,
        TopicId::RelativeLocators,
        TopicId::ShadowDom,
        TopicId::Tables,
        TopicId::Forms,
        TopicId::Calendar,
        TopicId::Slider,
        TopicId::Alerts,
        TopicId::KeyboardActions,
        TopicId::MouseActions,
        TopicId::Hover,
        TopicId::DragDrop,
        TopicId::FileUpload,
        TopicId::DownloadFile,
        TopicId::BrokenImage,
        TopicId::Waits,
        TopicId::Windows,
        TopicId::Iframes,
        TopicId::EndToEnd,
    ];

    /// Stable key used for persistence and routing.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TopicId::Locators => "locators",
            TopicId::RelativeLocators => "relative-locators",
            TopicId::ShadowDom => "shadow-dom",
            TopicId::Tables => "tables",
            TopicId::Forms => "forms",
            TopicId::Calendar => "calendar",
            TopicId::Slider => "slider",
            TopicId::Alerts => "alerts",
            TopicId::KeyboardActions => "keyboard-actions",
            TopicId::MouseActions => "mouse-actions",
            TopicId::Hover => "hover",
            TopicId::DragDrop => "drag-drop",
            TopicId::FileUpload => "file-upload",
            TopicId::DownloadFile => "download-file",
            TopicId::BrokenImage => "broken-image",
            TopicId::Waits => "waits",
            TopicId::Windows => "windows",
            TopicId::Iframes => "iframes",
            TopicId::EndToEnd => "end-to-end",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            TopicId::Locators => "Traditional Locators",
            TopicId::RelativeLocators => "Relative Locators",
            TopicId::ShadowDom => "Shadow DOM",
            TopicId::Tables => "Dynamic Tables",
            TopicId::Forms => "Forms",
            TopicId::Calendar => "Calendar",
            TopicId::Slider => "Slider",
            TopicId::Alerts => "Alerts",
            TopicId::KeyboardActions => "Keyboard Actions",
            TopicId::MouseActions => "Mouse Actions",
            TopicId::Hover => "Hover Effects",
            TopicId::DragDrop => "Drag & Drop",
            TopicId::FileUpload => "File Upload",
            TopicId::DownloadFile => "Download File",
            TopicId::BrokenImage => "Broken Image",
            TopicId::Waits => "Waits",
            TopicId::Windows => "Multi-Window",
            TopicId::Iframes => "Iframes",
            TopicId::EndToEnd => "Final Challenge",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TopicId::Locators => "Practice ID, class, XPath, and CSS selectors",
            TopicId::RelativeLocators => "Learn near, above, below, and to-the-right-of selectors",
            TopicId::ShadowDom => "Handle web components and shadow root elements",
            TopicId::Tables => "Sort, filter, and validate table data",
            TopicId::Forms => "Input fields, dropdowns, checkboxes, and validation",
            TopicId::Calendar => "Date pickers and range selection",
            TopicId::Slider => "Range controls and value validation",
            TopicId::Alerts => "Handle browser dialogs and popups",
            TopicId::KeyboardActions => "Key combinations and modifier keys",
            TopicId::MouseActions => "Clicks, hover, drag-and-drop, right-click",
            TopicId::Hover => "Test hover states and tooltips",
            TopicId::DragDrop => "Element repositioning and drop zones",
            TopicId::FileUpload => "Validate file selection and uploads",
            TopicId::DownloadFile => "Verify downloads and file integrity",
            TopicId::BrokenImage => "Detect and handle missing assets",
            TopicId::Waits => "Explicit, implicit, and fluent wait strategies",
            TopicId::Windows => "Handle tabs and window management",
            TopicId::Iframes => "Work with nested document contexts",
            TopicId::EndToEnd => "End-to-end testing scenario combining all concepts",
        }
    }

    /// Trackable sub-tasks of the topic's practice session.
    #[must_use]
    pub fn actions(self) -> &'static [ActionSpec] {
        match self {
            TopicId::Locators => &[
                ActionSpec { id: "id", description: "Located element using ID" },
                ActionSpec { id: "class", description: "Located element using Class Name" },
                ActionSpec { id: "name", description: "Located element using Name" },
                ActionSpec { id: "css", description: "Located element using CSS Selector" },
                ActionSpec { id: "xpath", description: "Located element using XPath" },
                ActionSpec { id: "tag", description: "Located element using Tag Name" },
            ],
            TopicId::RelativeLocators => &[
                ActionSpec { id: "above", description: "Located element using Above" },
                ActionSpec { id: "below", description: "Located element using Below" },
                ActionSpec { id: "left-of", description: "Located element using Left Of" },
                ActionSpec { id: "right-of", description: "Located element using Right Of" },
                ActionSpec { id: "near", description: "Located element using Near" },
            ],
            TopicId::ShadowDom => &[
                ActionSpec { id: "access", description: "Accessed shadow element" },
                ActionSpec { id: "interact", description: "Interacted with shadow component" },
            ],
            TopicId::Tables => &[
                ActionSpec { id: "sort", description: "Sorted a column" },
                ActionSpec { id: "edit", description: "Edited a cell" },
                ActionSpec { id: "status", description: "Changed a row status" },
                ActionSpec { id: "delete", description: "Deleted a row" },
            ],
            TopicId::Forms => &[
                ActionSpec { id: "text", description: "Typed in text input" },
                ActionSpec { id: "select", description: "Used dropdown menu" },
                ActionSpec { id: "checkbox", description: "Toggled checkbox" },
                ActionSpec { id: "radio", description: "Selected radio button" },
            ],
            TopicId::Calendar => &[
                ActionSpec { id: "select", description: "Selected a date" },
                ActionSpec { id: "navigate", description: "Navigated between months" },
            ],
            TopicId::Slider => &[
                ActionSpec { id: "move", description: "Adjusted slider value" },
                ActionSpec { id: "hover", description: "Hovered over slider" },
            ],
            TopicId::Alerts => &[
                ActionSpec { id: "alert", description: "Accepted a simple alert" },
                ActionSpec { id: "confirm", description: "Handled a confirm dialog" },
                ActionSpec { id: "prompt", description: "Answered a prompt dialog" },
            ],
            TopicId::KeyboardActions => &[
                ActionSpec { id: "modifier", description: "Used modifier key" },
                ActionSpec { id: "shortcut", description: "Performed keyboard shortcut" },
                ActionSpec { id: "sequence", description: "Executed key sequence" },
            ],
            TopicId::MouseActions => &[
                ActionSpec { id: "click", description: "Performed left click" },
                ActionSpec { id: "rightClick", description: "Performed right click" },
                ActionSpec { id: "doubleClick", description: "Performed double click" },
                ActionSpec { id: "dragDrop", description: "Completed drag and drop" },
                ActionSpec { id: "hover", description: "Hovered over element" },
            ],
            TopicId::Hover => &[
                ActionSpec { id: "hover1", description: "Hovered first item" },
                ActionSpec { id: "hover2", description: "Hovered second item" },
                ActionSpec { id: "hover3", description: "Hovered third item" },
            ],
            TopicId::DragDrop => &[
                ActionSpec { id: "drag", description: "Started dragging an item" },
                ActionSpec { id: "drop", description: "Dropped item in new position" },
                ActionSpec { id: "reorder", description: "Successfully reordered items" },
            ],
            TopicId::FileUpload => &[
                ActionSpec { id: "select", description: "Selected a file" },
                ActionSpec { id: "upload", description: "Uploaded the selected file" },
                ActionSpec { id: "empty", description: "Handled upload with no file selected" },
            ],
            TopicId::DownloadFile => &[
                ActionSpec { id: "download", description: "Successful file download" },
                ActionSpec { id: "error", description: "Handle download error" },
            ],
            TopicId::BrokenImage => &[
                ActionSpec { id: "valid", description: "Detected valid image" },
                ActionSpec { id: "broken", description: "Detected broken image" },
            ],
            TopicId::Waits => &[
                ActionSpec { id: "click", description: "Clicked load button" },
                ActionSpec { id: "wait", description: "Waited for content" },
                ActionSpec { id: "loaded", description: "Content loaded successfully" },
            ],
            TopicId::Windows => &[
                ActionSpec { id: "open", description: "Opened new window" },
                ActionSpec { id: "switch", description: "Switched between windows" },
            ],
            TopicId::Iframes => &[
                ActionSpec { id: "frame1", description: "Received a message from the event frame" },
                ActionSpec { id: "frame2", description: "Interacted with the nested DOM frame" },
            ],
            TopicId::EndToEnd => &[
                ActionSpec { id: "form", description: "Filled out registration form" },
                ActionSpec { id: "calendar", description: "Selected appointment date" },
                ActionSpec { id: "drag", description: "Arranged preferences" },
                ActionSpec { id: "iframe", description: "Viewed terms in iframe" },
                ActionSpec { id: "alert", description: "Handled confirmation alert" },
                ActionSpec { id: "window", description: "Opened preview in new window" },
            ],
        }
    }

    #[must_use]
    pub fn group(self) -> TopicGroup {
        TopicGroup::ALL
            .into_iter()
            .find(|group| group.topics().contains(&self))
            .unwrap_or(TopicGroup::Challenges)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known topic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown topic: {raw}")]
pub struct ParseTopicError {
    pub raw: String,
}

impl FromStr for TopicId {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicId::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| ParseTopicError { raw: s.to_string() })
    }
}

/// Home-page grouping of topics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopicGroup {
    LocatorStrategies,
    UiComponents,
    InputMethods,
    FileHandling,
    AdvancedTopics,
    Challenges,
}

impl TopicGroup {
    pub const ALL: [TopicGroup; 6] = [
        TopicGroup::LocatorStrategies,
        TopicGroup::UiComponents,
        TopicGroup::InputMethods,
        TopicGroup::FileHandling,
        TopicGroup::AdvancedTopics,
        TopicGroup::Challenges,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            TopicGroup::LocatorStrategies => "Locator Strategies",
            TopicGroup::UiComponents => "UI Components",
            TopicGroup::InputMethods => "Input Methods",
            TopicGroup::FileHandling => "File Handling",
            TopicGroup::AdvancedTopics => "Advanced Topics",
            TopicGroup::Challenges => "Challenges",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TopicGroup::LocatorStrategies => "Master element identification techniques",
            TopicGroup::UiComponents => "Practice common web component interactions",
            TopicGroup::InputMethods => "Master user interaction techniques",
            TopicGroup::FileHandling => "Work with file system interactions",
            TopicGroup::AdvancedTopics => "Complex scenarios and edge cases",
            TopicGroup::Challenges => "Test your comprehensive skills",
        }
    }

    #[must_use]
    pub fn topics(self) -> &'static [TopicId] {
        match self {
            TopicGroup::LocatorStrategies => &[
                TopicId::Locators,
                TopicId::RelativeLocators,
                TopicId::ShadowDom,
            ],
            TopicGroup::UiComponents => &[
                TopicId::Tables,
                TopicId::Forms,
                TopicId::Calendar,
                TopicId::Slider,
                TopicId::Alerts,
            ],
            TopicGroup::InputMethods => &[
                TopicId::KeyboardActions,
                TopicId::MouseActions,
                TopicId::Hover,
                TopicId::DragDrop,
            ],
            TopicGroup::FileHandling => &[
                TopicId::FileUpload,
                TopicId::DownloadFile,
                TopicId::BrokenImage,
            ],
            TopicGroup::AdvancedTopics => &[TopicId::Waits, TopicId::Windows, TopicId::Iframes],
            TopicGroup::Challenges => &[TopicId::EndToEnd],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn topic_keys_round_trip_through_from_str() {
        for topic in TopicId::ALL {
            assert_eq!(topic.as_str().parse::<TopicId>(), Ok(topic));
        }
    }

    #[test]
    fn unknown_topic_is_rejected() {
        let err = "selenium-grid".parse::<TopicId>().unwrap_err();
        assert_eq!(err.raw, "selenium-grid");
    }

    #[test]
    fn padded_or_cased_ids_are_not_topics() {
        for raw in [" alerts", "alerts\n", "Alerts", "\thover "] {
            assert!(raw.parse::<TopicId>().is_err(), "{raw:?} parsed");
        }
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&TopicId::DragDrop).unwrap();
        assert_eq!(json, "\"drag-drop\"");
        let parsed: TopicId = serde_json::from_str("\"end-to-end\"").unwrap();
        assert_eq!(parsed, TopicId::EndToEnd);
    }

    #[test]
    fn every_topic_belongs_to_exactly_one_group() {
        let mut seen = HashSet::new();
        for group in TopicGroup::ALL {
            for topic in group.topics() {
                assert!(seen.insert(*topic), "{topic} listed twice");
                assert_eq!(topic.group(), group);
            }
        }
        assert_eq!(seen.len(), TopicId::ALL.len());
    }

    #[test]
    fn action_ids_are_unique_per_topic() {
        for topic in TopicId::ALL {
            let ids: HashSet<_> = topic.actions().iter().map(|spec| spec.id).collect();
            assert_eq!(ids.len(), topic.actions().len(), "duplicate ids in {topic}");
            assert!(!topic.actions().is_empty(), "{topic} has no actions");
        }
    }
}

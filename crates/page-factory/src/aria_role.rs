// ARIA roles accepted by role-based locators
//
// Mirrors the role list of Playwright's `getByRole`. Roles serialize to
// their lowercase ARIA names (`AlertDialog` -> "alertdialog").
//
// See: https://www.w3.org/TR/wai-aria-1.2/#role_definitions

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! aria_roles {
    ($($variant:ident => $name:literal,)+) => {
        /// ARIA role of an element
        ///
        /// Only meaningful for descriptors using [`Strategy::Role`](crate::Strategy::Role).
        /// Defaults to [`AriaRole::None`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum AriaRole {
            #[default]
            None,
            $($variant,)+
        }

        impl AriaRole {
            /// Every role, `None` first
            pub const ALL: &'static [AriaRole] = &[AriaRole::None, $(AriaRole::$variant,)+];

            /// Returns the ARIA role name as used in selectors
            pub const fn as_str(self) -> &'static str {
                match self {
                    AriaRole::None => "none",
                    $(AriaRole::$variant => $name,)+
                }
            }
        }
    };
}

aria_roles! {
    Alert => "alert",
    AlertDialog => "alertdialog",
    Application => "application",
    Article => "article",
    Banner => "banner",
    Blockquote => "blockquote",
    Button => "button",
    Caption => "caption",
    Cell => "cell",
    Checkbox => "checkbox",
    Code => "code",
    ColumnHeader => "columnheader",
    Combobox => "combobox",
    Complementary => "complementary",
    ContentInfo => "contentinfo",
    Definition => "definition",
    Deletion => "deletion",
    Dialog => "dialog",
    Directory => "directory",
    Document => "document",
    Emphasis => "emphasis",
    Feed => "feed",
    Figure => "figure",
    Form => "form",
    Generic => "generic",
    Grid => "grid",
    GridCell => "gridcell",
    Group => "group",
    Heading => "heading",
    Img => "img",
    Insertion => "insertion",
    Link => "link",
    List => "list",
    Listbox => "listbox",
    ListItem => "listitem",
    Log => "log",
    Main => "main",
    Marquee => "marquee",
    Math => "math",
    Meter => "meter",
    Menu => "menu",
    Menubar => "menubar",
    MenuItem => "menuitem",
    MenuItemCheckbox => "menuitemcheckbox",
    MenuItemRadio => "menuitemradio",
    Navigation => "navigation",
    Note => "note",
    Option => "option",
    Paragraph => "paragraph",
    Presentation => "presentation",
    ProgressBar => "progressbar",
    Radio => "radio",
    RadioGroup => "radiogroup",
    Region => "region",
    Row => "row",
    RowGroup => "rowgroup",
    RowHeader => "rowheader",
    Scrollbar => "scrollbar",
    Search => "search",
    Searchbox => "searchbox",
    Separator => "separator",
    Slider => "slider",
    SpinButton => "spinbutton",
    Status => "status",
    Strong => "strong",
    Subscript => "subscript",
    Superscript => "superscript",
    Switch => "switch",
    Tab => "tab",
    Table => "table",
    TabList => "tablist",
    TabPanel => "tabpanel",
    Term => "term",
    Textbox => "textbox",
    Time => "time",
    Timer => "timer",
    Toolbar => "toolbar",
    Tooltip => "tooltip",
    Tree => "tree",
    TreeGrid => "treegrid",
    TreeItem => "treeitem",
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AriaRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AriaRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown ARIA role '{s}'")))
    }
}

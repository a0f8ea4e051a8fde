//! yWriter 7 project reader.
//!
//! A `.yw7` file is an XML document rooted at `<YWRITER7>`:
//!
//! ```text
//! YWRITER7
//! ├── PROJECT     Title, AuthorName, Desc
//! ├── SCENES
//! │   └── SCENE   ID, Title, Desc, SceneContent, WordCount, Unused,
//! │               Fields/Field_SceneType (1 = notes, 2 = todo)
//! └── CHAPTERS
//!     └── CHAPTER ID, Title, Desc, SectionStart, Type, ChapterType, Unused,
//!                 Fields/Field_IsTrash, Scenes/ScID*
//! ```
//!
//! Chapters are kept in file order; each chapter's `ScID` list gives its
//! scene order. Elements this viewer does not need are skipped.

use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

use crate::error::{Error, Result};
use crate::model::{Chapter, ChapterId, Project, Scene, SceneId, SceneStatus};
use crate::util::{decode_text, normalize_newlines, xml_declared_encoding};

use super::ProjectReader;

const ROOT: &str = "YWRITER7";

/// Reader for yWriter 7 XML projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yw7Reader;

impl Yw7Reader {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectReader for Yw7Reader {
    fn read_bytes(&self, bytes: &[u8]) -> Result<Project> {
        let content = decode_text(bytes, xml_declared_encoding(bytes));
        parse_yw7(&content)
    }
}

/// Parse a yWriter 7 document.
pub fn parse_yw7(content: &str) -> Result<Project> {
    let mut reader = Reader::from_str(content);
    let mut parser = Yw7Parser::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                parser.start(name)?;
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                parser.start(name)?;
                parser.end()?;
            }
            Event::End(_) => parser.end()?,
            Event::Text(e) => parser.text.push_str(&String::from_utf8_lossy(e.as_ref())),
            Event::CData(e) => parser.text.push_str(&String::from_utf8_lossy(&e)),
            Event::GeneralRef(e) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                let resolved = resolve_entity(&entity).ok_or_else(|| {
                    Error::InvalidProject(format!("unknown entity &{entity};"))
                })?;
                parser.text.push_str(&resolved);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    parser.finish()
}

#[derive(Default)]
struct RawChapter {
    id: Option<u32>,
    title: Option<String>,
    description: Option<String>,
    section_start: bool,
    old_type: Option<u8>,
    chapter_type: Option<u8>,
    unused: bool,
    trash: bool,
    scene_ids: Vec<SceneId>,
}

#[derive(Default)]
struct RawScene {
    id: Option<u32>,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    word_count: Option<u32>,
    unused: bool,
    notes: bool,
    todo: bool,
}

#[derive(Default)]
struct Yw7Parser {
    project: Project,
    /// Open element names, outermost first.
    stack: Vec<String>,
    /// Character data of the innermost element.
    text: String,
    chapter: Option<RawChapter>,
    scene: Option<RawScene>,
    seen_root: bool,
}

impl Yw7Parser {
    fn start(&mut self, name: String) -> Result<()> {
        let parent = self.stack.last().map(String::as_str);
        match (parent, name.as_str()) {
            (None, ROOT) => self.seen_root = true,
            (None, other) => {
                return Err(Error::InvalidProject(format!(
                    "expected <{ROOT}> root element, found <{other}>"
                )));
            }
            (Some("CHAPTERS"), "CHAPTER") => self.chapter = Some(RawChapter::default()),
            (Some("SCENES"), "SCENE") => self.scene = Some(RawScene::default()),
            _ => {}
        }
        self.stack.push(name);
        self.text.clear();
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        let Some(name) = self.stack.pop() else {
            return Ok(());
        };
        let parent = self.stack.last().cloned().unwrap_or_default();
        let text = std::mem::take(&mut self.text);

        match (parent.as_str(), name.as_str()) {
            ("PROJECT", "Title") => self.project.title = single_line(&text),
            ("PROJECT", "AuthorName") => self.project.author = single_line(&text),
            ("PROJECT", "Desc") => self.project.description = multi_line(&text),
            ("SCENES", "SCENE") => self.finish_scene()?,
            ("CHAPTERS", "CHAPTER") => self.finish_chapter()?,
            ("SCENE", field) => {
                if let Some(scene) = self.scene.as_mut() {
                    match field {
                        "ID" => scene.id = parse_number("SCENE/ID", &text),
                        "Title" => scene.title = single_line(&text),
                        "Desc" => scene.description = multi_line(&text),
                        "SceneContent" => scene.content = multi_line(&text),
                        "WordCount" => scene.word_count = parse_number("WordCount", &text),
                        "Unused" => scene.unused = is_set(&text),
                        _ => {}
                    }
                }
            }
            ("CHAPTER", field) => {
                if let Some(chapter) = self.chapter.as_mut() {
                    match field {
                        "ID" => chapter.id = parse_number("CHAPTER/ID", &text),
                        "Title" => chapter.title = single_line(&text),
                        "Desc" => chapter.description = multi_line(&text),
                        "SectionStart" => chapter.section_start = true,
                        "Type" => chapter.old_type = parse_number("Type", &text),
                        "ChapterType" => chapter.chapter_type = parse_number("ChapterType", &text),
                        "Unused" => chapter.unused = is_set(&text),
                        _ => {}
                    }
                }
            }
            ("Scenes", "ScID") => {
                if let Some(chapter) = self.chapter.as_mut()
                    && let Some(id) = parse_number("ScID", &text)
                {
                    chapter.scene_ids.push(SceneId(id));
                }
            }
            ("Fields", field) => self.field(field, text.trim()),
            _ => {}
        }
        Ok(())
    }

    /// A custom `Field_*` value of the enclosing scene or chapter.
    fn field(&mut self, field: &str, value: &str) {
        let owner = self.stack.iter().rev().nth(1).map(String::as_str);
        match (owner, field) {
            (Some("SCENE"), "Field_SceneType") => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.notes = value == "1";
                    scene.todo = value == "2";
                }
            }
            (Some("CHAPTER"), "Field_IsTrash") => {
                if let Some(chapter) = self.chapter.as_mut() {
                    chapter.trash = value == "1";
                }
            }
            _ => {}
        }
    }

    fn finish_scene(&mut self) -> Result<()> {
        let Some(raw) = self.scene.take() else {
            return Ok(());
        };
        let id = raw
            .id
            .ok_or_else(|| Error::MissingElement("SCENE/ID".to_string()))?;
        let scene = Scene {
            title: raw.title,
            description: raw.description,
            content: raw.content,
            word_count: raw.word_count,
            status: SceneStatus::Flags {
                unused: raw.unused,
                notes: raw.notes,
                todo: raw.todo,
            },
        };
        self.project.add_scene(SceneId(id), scene);
        Ok(())
    }

    fn finish_chapter(&mut self) -> Result<()> {
        let Some(raw) = self.chapter.take() else {
            return Ok(());
        };
        let id = raw
            .id
            .ok_or_else(|| Error::MissingElement("CHAPTER/ID".to_string()))?;
        let chapter = Chapter {
            title: raw.title,
            description: raw.description,
            level: u8::from(raw.section_start),
            // Files written before ChapterType existed only carry Type.
            chapter_type: raw.chapter_type.or(raw.old_type).unwrap_or(0),
            old_type: raw.old_type,
            is_unused: raw.unused,
            is_trash: raw.trash,
            scene_ids: raw.scene_ids,
        };
        self.project.add_chapter(ChapterId(id), chapter);
        Ok(())
    }

    fn finish(mut self) -> Result<Project> {
        if !self.seen_root {
            return Err(Error::InvalidProject(format!(
                "no <{ROOT}> element found"
            )));
        }

        let scenes = &self.project.scenes;
        for id in &self.project.chapter_order {
            let Some(chapter) = self.project.chapters.get_mut(id) else {
                continue;
            };
            chapter.scene_ids.retain(|scene_id| {
                let known = scenes.contains_key(scene_id);
                if !known {
                    warn!(
                        chapter = id.0,
                        scene = scene_id.0,
                        "dropping reference to unknown scene"
                    );
                }
                known
            });
        }

        Ok(self.project)
    }
}

fn single_line(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn multi_line(text: &str) -> Option<String> {
    let text = normalize_newlines(text);
    let text = text.trim_matches('\n');
    (!text.trim().is_empty()).then(|| text.to_string())
}

/// yWriter writes boolean flags as `-1`.
fn is_set(text: &str) -> bool {
    matches!(text.trim(), "-1" | "1")
}

fn parse_number<T: FromStr>(field: &str, text: &str) -> Option<T> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(field, value = text, "ignoring unparsable number");
            None
        }
    }
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.strip_prefix('#')?.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}

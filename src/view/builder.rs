//! Single-pass view construction.

use tracing::debug;

use crate::filter::{chapter_included, scene_included};
use crate::fragment::{StyleTag, TaggedFragment};
use crate::i18n::{Translate, Untranslated, msg};
use crate::markup::{self, MarkupMode};
use crate::model::Project;

use super::{Statistics, ViewBundle, ViewConfig, ViewKind};

/// Separator placed before every scene after the first in a chapter.
pub const SCENE_DIVIDER: &str = "* * *\n";

/// Builds [`ViewBundle`]s from projects.
///
/// The builder holds configuration only; every call to [`build`](Self::build)
/// starts from scratch, so building twice from the same project yields equal
/// bundles.
pub struct ViewBuilder {
    config: ViewConfig,
    translator: Box<dyn Translate>,
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBuilder {
    /// Create a builder with default configuration and English messages.
    pub fn new() -> Self {
        Self::with_config(ViewConfig::default())
    }

    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            config,
            translator: Box::new(Untranslated),
        }
    }

    /// Use `translator` for placeholders and the statistics line.
    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Walk the project once and produce all views.
    pub fn build(&self, project: &Project) -> ViewBundle {
        let mode = self.config.mode;
        let mut bundle = ViewBundle::default();
        let mut stats = Statistics::default();

        if let Some(desc) = non_empty(&project.description) {
            bundle.description.extend(body(desc, mode));
        }

        // Heading that precedes the next scene's description or content.
        // Replaced by the divider after each included scene.
        let mut scene_heading: Option<TaggedFragment> = None;

        for (_, chapter) in project.chapters_in_order() {
            if !chapter_included(chapter, self.config.chapter_rule) {
                continue;
            }
            stats.chapters += 1;

            let heading_tag = if chapter.level == 0 {
                StyleTag::Heading2
            } else {
                StyleTag::Heading1
            };
            let list_tag = match (mode, chapter.level) {
                (MarkupMode::Styled, 0) => StyleTag::None,
                (MarkupMode::Styled, _) => StyleTag::Bold,
                (MarkupMode::Markdown, _) => StyleTag::Bullet,
            };

            let title = non_empty(&chapter.title);
            if let Some(title) = title {
                bundle
                    .chapter_titles
                    .push(TaggedFragment::new(line(title), list_tag));
                let heading = TaggedFragment::new(line(title), heading_tag);
                bundle.scene_titles.push(heading.clone());
                scene_heading = Some(heading);
            }

            let desc = non_empty(&chapter.description).map(|desc| body(desc, mode));
            if let Some(desc) = desc.filter(|paragraphs| !paragraphs.is_empty()) {
                if let Some(title) = title {
                    bundle
                        .chapter_descriptions
                        .push(TaggedFragment::new(line(title), heading_tag));
                }
                bundle.chapter_descriptions.extend(desc);
            }

            for (_, scene) in project.scenes_of(chapter) {
                if !scene_included(scene) {
                    continue;
                }
                stats.scenes += 1;

                if let Some(title) = non_empty(&scene.title) {
                    bundle
                        .scene_titles
                        .push(TaggedFragment::new(line(title), scene_list_tag(mode)));
                }

                let desc = non_empty(&scene.description).map(|desc| body(desc, mode));
                if let Some(desc) = desc.filter(|paragraphs| !paragraphs.is_empty()) {
                    bundle.scene_descriptions.extend(scene_heading.clone());
                    bundle.scene_descriptions.extend(desc);
                }

                let content = non_empty(&scene.content).map(|content| body(content, mode));
                if let Some(content) = content.filter(|paragraphs| !paragraphs.is_empty()) {
                    bundle.scene_contents.extend(scene_heading.clone());
                    bundle.scene_contents.extend(content);
                }

                scene_heading = Some(TaggedFragment::new(SCENE_DIVIDER, StyleTag::Centered));

                if let Some(words) = scene.word_count {
                    stats.words += u64::from(words);
                }
            }
        }

        for kind in ViewKind::ALL {
            let stream = bundle.get_mut(kind);
            if stream.is_empty() {
                stream.push(self.placeholder(kind));
            }
        }

        bundle.title = match non_empty(&project.title) {
            Some(title) => title.to_string(),
            None => self.translator.translate(msg::UNTITLED_PROJECT).into_owned(),
        };
        bundle.author = non_empty(&project.author).map(str::to_string);
        bundle.summary = stats.summary(self.translator.as_ref());
        bundle.statistics = stats;

        debug!(
            chapters = stats.chapters,
            scenes = stats.scenes,
            words = stats.words,
            "built project views"
        );

        bundle
    }

    fn placeholder(&self, kind: ViewKind) -> TaggedFragment {
        let text = format!("({})", self.translator.translate(kind.placeholder_msgid()));
        let tag = match self.config.mode {
            MarkupMode::Styled => StyleTag::Italic,
            MarkupMode::Markdown => StyleTag::None,
        };
        TaggedFragment::new(text, tag)
    }
}

fn scene_list_tag(mode: MarkupMode) -> StyleTag {
    match mode {
        MarkupMode::Styled => StyleTag::None,
        MarkupMode::Markdown => StyleTag::Bullet,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn line(text: &str) -> String {
    format!("{text}\n")
}

/// Converted markup as untagged paragraphs, empty when nothing is left.
fn body(text: &str, mode: MarkupMode) -> Vec<TaggedFragment> {
    match mode {
        MarkupMode::Styled => markup::to_fragments(Some(text))
            .into_iter()
            .map(|fragment| TaggedFragment::new(line(&fragment.text), fragment.tag))
            .collect(),
        MarkupMode::Markdown => {
            let converted = markup::convert(Some(text), mode);
            if converted.is_empty() {
                Vec::new()
            } else {
                vec![TaggedFragment::plain(line(&converted))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::LegacyChapterRule;
    use crate::i18n::Catalog;
    use crate::model::{Chapter, ChapterId, Scene, SceneId, SceneStatus};

    fn frag(text: &str, tag: StyleTag) -> TaggedFragment {
        TaggedFragment::new(text, tag)
    }

    fn demo_project() -> Project {
        let mut project = Project::new().with_title("Demo");
        project.add_scene(
            SceneId(1),
            Scene::new("S1").with_content("c1").with_word_count(3),
        );
        project.add_scene(
            SceneId(2),
            Scene::new("S2").with_content("c2").with_word_count(2),
        );
        project.add_scene(
            SceneId(3),
            Scene::new("Hidden").with_content("x").with_word_count(100),
        );
        project.add_chapter(
            ChapterId(1),
            Chapter::new("Ch1")
                .with_description("d1")
                .with_scene(SceneId(1))
                .with_scene(SceneId(2)),
        );
        project.add_chapter(
            ChapterId(2),
            Chapter::new("Notes").with_type(1).with_scene(SceneId(3)),
        );
        project
    }

    #[test]
    fn test_demo_scenario() {
        let bundle = ViewBuilder::new().build(&demo_project());

        assert_eq!(bundle.chapter_titles, vec![frag("Ch1\n", StyleTag::None)]);
        assert_eq!(
            bundle.chapter_descriptions,
            vec![frag("Ch1\n", StyleTag::Heading2), frag("d1\n", StyleTag::None)]
        );
        assert_eq!(
            bundle.scene_titles,
            vec![
                frag("Ch1\n", StyleTag::Heading2),
                frag("S1\n", StyleTag::None),
                frag("S2\n", StyleTag::None),
            ]
        );
        assert_eq!(
            bundle.scene_contents,
            vec![
                frag("Ch1\n", StyleTag::Heading2),
                frag("c1\n", StyleTag::None),
                frag("* * *\n", StyleTag::Centered),
                frag("c2\n", StyleTag::None),
            ]
        );
        assert_eq!(bundle.summary, "1 chapters, 2 scenes, 5 words");
        assert_eq!(bundle.title, "Demo");
    }

    #[test]
    fn test_empty_project_gets_placeholders() {
        let bundle = ViewBuilder::new().build(&Project::new());

        assert_eq!(
            bundle.description,
            vec![frag("(No project description available)", StyleTag::Italic)]
        );
        assert_eq!(
            bundle.scene_contents,
            vec![frag("(No scene contents available)", StyleTag::Italic)]
        );
        for kind in ViewKind::ALL {
            assert_eq!(bundle.get(kind).len(), 1, "{kind}");
        }
        assert_eq!(bundle.summary, "0 chapters, 0 scenes, 0 words");
        assert_eq!(bundle.title, "Untitled project");
    }

    #[test]
    fn test_markdown_placeholders_are_untagged() {
        let builder = ViewBuilder::with_config(ViewConfig::default().with_mode(MarkupMode::Markdown));
        let bundle = builder.build(&Project::new());
        assert_eq!(bundle.chapter_titles[0].tag, StyleTag::None);
    }

    #[test]
    fn test_translated_placeholders() {
        let mut catalog = Catalog::new();
        catalog.insert(msg::NO_SCENE_TITLES, "Keine Szenentitel vorhanden");
        let bundle = ViewBuilder::new().with_translator(catalog).build(&Project::new());
        assert_eq!(bundle.scene_titles[0].text, "(Keine Szenentitel vorhanden)");
    }

    #[test]
    fn test_part_heading_is_heading1_and_bold_in_list() {
        let mut project = Project::new();
        project.add_chapter(ChapterId(1), Chapter::new("Part I").with_level(1));
        let bundle = ViewBuilder::new().build(&project);

        assert_eq!(bundle.chapter_titles, vec![frag("Part I\n", StyleTag::Bold)]);
        assert_eq!(bundle.scene_titles, vec![frag("Part I\n", StyleTag::Heading1)]);
    }

    #[test]
    fn test_markdown_mode_lists_and_converts() {
        let mut project = Project::new().with_description("a [b]bold[/b]\nline");
        project.add_scene(SceneId(1), Scene::new("S").with_content("[i]x[/i]"));
        project.add_chapter(ChapterId(1), Chapter::new("C").with_scene(SceneId(1)));

        let builder = ViewBuilder::with_config(ViewConfig::default().with_mode(MarkupMode::Markdown));
        let bundle = builder.build(&project);

        assert_eq!(bundle.description, vec![frag("a **bold**\n\nline\n", StyleTag::None)]);
        assert_eq!(bundle.chapter_titles, vec![frag("C\n", StyleTag::Bullet)]);
        assert_eq!(bundle.scene_titles[1], frag("S\n", StyleTag::Bullet));
        assert_eq!(bundle.scene_contents[1], frag("*x*\n", StyleTag::None));
    }

    #[test]
    fn test_divider_follows_scene_without_content() {
        let mut project = Project::new();
        project.add_scene(SceneId(1), Scene::new("Empty"));
        project.add_scene(SceneId(2), Scene::new("Full").with_content("text"));
        project.add_chapter(
            ChapterId(1),
            Chapter::new("C").with_scene(SceneId(1)).with_scene(SceneId(2)),
        );

        let bundle = ViewBuilder::new().build(&project);
        assert_eq!(
            bundle.scene_contents,
            vec![frag("* * *\n", StyleTag::Centered), frag("text\n", StyleTag::None)]
        );
    }

    #[test]
    fn test_excluded_scene_does_not_consume_heading() {
        let mut project = Project::new();
        project.add_scene(
            SceneId(1),
            Scene::new("Todo").with_content("t").with_status(SceneStatus::Flags {
                unused: false,
                notes: false,
                todo: true,
            }),
        );
        project.add_scene(SceneId(2), Scene::new("Real").with_content("r"));
        project.add_chapter(
            ChapterId(1),
            Chapter::new("C").with_scene(SceneId(1)).with_scene(SceneId(2)),
        );

        let bundle = ViewBuilder::new().build(&project);
        assert_eq!(
            bundle.scene_contents,
            vec![frag("C\n", StyleTag::Heading2), frag("r\n", StyleTag::None)]
        );
        assert_eq!(bundle.statistics.scenes, 1);
    }

    #[test]
    fn test_untitled_chapter_keeps_previous_heading() {
        let mut project = Project::new();
        project.add_scene(SceneId(1), Scene::new("A").with_content("a"));
        project.add_scene(SceneId(2), Scene::new("B").with_content("b"));
        project.add_chapter(ChapterId(1), Chapter::new("First").with_scene(SceneId(1)));
        project.add_chapter(
            ChapterId(2),
            Chapter::default().with_scene(SceneId(2)),
        );

        let bundle = ViewBuilder::new().build(&project);
        assert_eq!(bundle.scene_contents[2], frag("* * *\n", StyleTag::Centered));
        assert_eq!(bundle.chapter_titles.len(), 1);
        assert_eq!(bundle.statistics.chapters, 2);
    }

    #[test]
    fn test_scene_description_stream() {
        let mut project = Project::new();
        project.add_scene(SceneId(1), Scene::new("A").with_description("[i]da[/i]"));
        project.add_scene(SceneId(2), Scene::new("B").with_description("db"));
        project.add_chapter(
            ChapterId(1),
            Chapter::new("C").with_scene(SceneId(1)).with_scene(SceneId(2)),
        );

        let bundle = ViewBuilder::new().build(&project);
        assert_eq!(
            bundle.scene_descriptions,
            vec![
                frag("C\n", StyleTag::Heading2),
                frag("da\n", StyleTag::None),
                frag("* * *\n", StyleTag::Centered),
                frag("db\n", StyleTag::None),
            ]
        );
    }

    #[test]
    fn test_either_field_rule_drops_more_chapters() {
        let mut project = Project::new();
        project.add_chapter(
            ChapterId(1),
            Chapter::new("Legacy").with_type(0).with_old_type(1),
        );

        let both = ViewBuilder::new().build(&project);
        let either = ViewBuilder::with_config(
            ViewConfig::default().with_chapter_rule(LegacyChapterRule::EitherField),
        )
        .build(&project);

        assert_eq!(both.statistics.chapters, 1);
        assert_eq!(either.statistics.chapters, 0);
    }

    #[test]
    fn test_markup_only_text_counts_as_empty() {
        let mut project = Project::new().with_description("[i][/i]");
        project.add_scene(
            SceneId(1),
            Scene::new("S")
                .with_description("[b][/b]")
                .with_content("[i][/i]"),
        );
        project.add_chapter(
            ChapterId(1),
            Chapter::new("C")
                .with_description("[c][/c]")
                .with_scene(SceneId(1)),
        );

        let bundle = ViewBuilder::new().build(&project);
        assert_eq!(
            bundle.description,
            vec![frag("(No project description available)", StyleTag::Italic)]
        );
        assert_eq!(
            bundle.chapter_descriptions,
            vec![frag("(No chapter descriptions available)", StyleTag::Italic)]
        );
        assert_eq!(
            bundle.scene_descriptions,
            vec![frag("(No scene descriptions available)", StyleTag::Italic)]
        );
        assert_eq!(
            bundle.scene_contents,
            vec![frag("(No scene contents available)", StyleTag::Italic)]
        );
        assert_eq!(bundle.statistics.scenes, 1);
    }
}

//! Language selection, UI chrome strings and the localized-field resolver.

use std::collections::BTreeMap;

use crate::catalog::MenuItem;

/// Languages the storefront serves. The viewer picks exactly one at a time;
/// every content lookup is parameterized by it. Ordering of the variants is
/// the natural key order used by the last resolution fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lang {
    Jp,
    En,
    Cn,
    Kr,
}

/// Stable presentation order for the language toggle.
pub const SUPPORTED_LANGS: [Lang; 4] = [Lang::Jp, Lang::En, Lang::Cn, Lang::Kr];

impl Lang {
    /// Canonical code as shown on the toggle and sent with analytics events.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Jp => "JP",
            Lang::En => "EN",
            Lang::Cn => "CN",
            Lang::Kr => "KR",
        }
    }

    /// Parses a language value case-insensitively, tolerating region tags
    /// (`ja-JP`, `zh_CN`, …) and both ISO and storefront spellings.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "jp" | "ja" => Some(Lang::Jp),
            "en" => Some(Lang::En),
            "cn" | "zh" => Some(Lang::Cn),
            "kr" | "ko" => Some(Lang::Kr),
            _ => None,
        }
    }

    /// Next language in toggle order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Lang::Jp => Lang::En,
            Lang::En => Lang::Cn,
            Lang::Cn => Lang::Kr,
            Lang::Kr => Lang::Jp,
        }
    }

    /// UI chrome strings for this language.
    pub fn ui(self) -> &'static dyn UiText {
        match self {
            Lang::Jp => &Japanese,
            Lang::En => &English,
            Lang::Cn => &SimplifiedChinese,
            Lang::Kr => &Korean,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Jp
    }
}

/// A per-item localized field: language code to display string.
pub type LocalizedText = BTreeMap<Lang, &'static str>;

/// Which localized field of a menu item is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    /// Literal returned when a field mapping is entirely absent.
    pub fn missing_literal(self) -> &'static str {
        match self {
            Field::Name => "Item",
            Field::Description => "",
        }
    }
}

/// One step of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStep {
    /// The viewer's language. Skipped when the entry is missing or empty.
    Active(Lang),
    /// The English entry, used whenever present.
    English,
    /// The first entry in the mapping's natural key order.
    FirstAvailable,
}

/// The ordered chain evaluated by [`resolve`]. Kept as data so the
/// resolution order stays auditable and testable on its own.
pub fn fallback_chain(active: Lang) -> [FallbackStep; 3] {
    [
        FallbackStep::Active(active),
        FallbackStep::English,
        FallbackStep::FirstAvailable,
    ]
}

/// Resolves one localized field of a menu item for the active language.
///
/// Walks [`fallback_chain`] and returns the first hit; if the whole chain
/// misses (the mapping is empty) the field's fixed literal is returned.
/// Always terminates with a string, never errors.
pub fn resolve(item: &MenuItem, field: Field, active: Lang) -> &str {
    let text = match field {
        Field::Name => &item.name,
        Field::Description => &item.desc,
    };
    resolve_text(text, active).unwrap_or_else(|| field.missing_literal())
}

fn resolve_text(text: &LocalizedText, active: Lang) -> Option<&'static str> {
    for step in fallback_chain(active) {
        let hit = match step {
            FallbackStep::Active(lang) => {
                text.get(&lang).copied().filter(|value| !value.is_empty())
            }
            FallbackStep::English => text.get(&Lang::En).copied(),
            FallbackStep::FirstAvailable => text.values().next().copied(),
        };
        if hit.is_some() {
            return hit;
        }
    }
    None
}

pub trait UiText {
    fn store_name(&self) -> &'static str;
    fn hero_title(&self) -> &'static str;
    fn hero_tagline(&self) -> &'static str;
    fn seasonal(&self) -> &'static str;
    fn classic(&self) -> &'static str;
    fn vote_hint(&self) -> &'static str;
    fn vote_label(&self) -> &'static str;
    fn btn_view(&self) -> &'static str;
    fn alert_order(&self) -> &'static str;
    fn share(&self) -> &'static str;
    fn copied(&self) -> &'static str;
    fn footer_hint(&self) -> &'static str;
}

pub struct Japanese;
impl UiText for Japanese {
    fn store_name(&self) -> &'static str { "ミニヨン 天神" }
    fn hero_title(&self) -> &'static str { "サクサク×もっちり。天神だけの特別を。" }
    fn hero_tagline(&self) -> &'static str { "季節限定や定番メニューをゆったり選べるデジタルメニュー。" }
    fn seasonal(&self) -> &'static str { "季節限定" }
    fn classic(&self) -> &'static str { "定番メニュー" }
    fn vote_hint(&self) -> &'static str { "※ お好きな商品に投票してください" }
    fn vote_label(&self) -> &'static str { "投票" }
    fn btn_view(&self) -> &'static str { "見る" }
    fn alert_order(&self) -> &'static str { "店頭でご注文ください（オンライン注文は準備中）" }
    fn share(&self) -> &'static str { "シェア" }
    fn copied(&self) -> &'static str { "リンクをコピーしました" }
    fn footer_hint(&self) -> &'static str { "↑↓←→ 選択  Enter 投票  o 見る  l/1-4 言語  s シェア  q 終了" }
}

pub struct English;
impl UiText for English {
    fn store_name(&self) -> &'static str { "MIGNON Tenjin" }
    fn hero_title(&self) -> &'static str { "Crispy × Chewy. Only in Tenjin." }
    fn hero_tagline(&self) -> &'static str { "Browse seasonal and classic items with ease." }
    fn seasonal(&self) -> &'static str { "Seasonal" }
    fn classic(&self) -> &'static str { "Classics" }
    fn vote_hint(&self) -> &'static str { "* Tap to vote for your favorite" }
    fn vote_label(&self) -> &'static str { "Vote for" }
    fn btn_view(&self) -> &'static str { "View" }
    fn alert_order(&self) -> &'static str { "Please order at the counter (online coming soon)" }
    fn share(&self) -> &'static str { "Share" }
    fn copied(&self) -> &'static str { "Link copied" }
    fn footer_hint(&self) -> &'static str { "↑↓←→ select  Enter vote  o view  l/1-4 language  s share  q quit" }
}

pub struct SimplifiedChinese;
impl UiText for SimplifiedChinese {
    fn store_name(&self) -> &'static str { "MIGNON 天神店" }
    fn hero_title(&self) -> &'static str { "外酥内软，只在天神。" }
    fn hero_tagline(&self) -> &'static str { "轻松选择季节限定与定番款。" }
    fn seasonal(&self) -> &'static str { "季节限定" }
    fn classic(&self) -> &'static str { "定番菜单" }
    fn vote_hint(&self) -> &'static str { "※ 给你喜欢的商品投票吧" }
    fn vote_label(&self) -> &'static str { "为以下商品投票" }
    fn btn_view(&self) -> &'static str { "查看" }
    fn alert_order(&self) -> &'static str { "请到柜台点单（线上订购开发中）" }
    fn share(&self) -> &'static str { "分享" }
    fn copied(&self) -> &'static str { "链接已复制" }
    fn footer_hint(&self) -> &'static str { "↑↓←→ 选择  Enter 投票  o 查看  l/1-4 语言  s 分享  q 退出" }
}

pub struct Korean;
impl UiText for Korean {
    fn store_name(&self) -> &'static str { "미뇽 텐진점" }
    fn hero_title(&self) -> &'static str { "겉바속촉, 텐진 한정." }
    fn hero_tagline(&self) -> &'static str { "시즌 한정과 클래식을 편하게 고르세요." }
    fn seasonal(&self) -> &'static str { "시즌 한정" }
    fn classic(&self) -> &'static str { "클래식" }
    fn vote_hint(&self) -> &'static str { "* 좋아하는 메뉴에 투표하세요" }
    fn vote_label(&self) -> &'static str { "투표" }
    fn btn_view(&self) -> &'static str { "보기" }
    fn alert_order(&self) -> &'static str { "매장에서 주문해 주세요 (온라인 준비 중)" }
    fn share(&self) -> &'static str { "공유" }
    fn copied(&self) -> &'static str { "링크 복사됨" }
    fn footer_hint(&self) -> &'static str { "↑↓←→ 선택  Enter 투표  o 보기  l/1-4 언어  s 공유  q 종료" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn item(
        name: &[(Lang, &'static str)],
        desc: &[(Lang, &'static str)],
    ) -> MenuItem {
        MenuItem {
            key: "test",
            emoji: "🥐",
            name: name.iter().copied().collect(),
            desc: desc.iter().copied().collect(),
            price: 100,
            tag: None,
        }
    }

    #[test]
    fn resolve_prefers_active_language() {
        let item = item(&[(Lang::Jp, "プレーン"), (Lang::En, "Plain")], &[]);
        assert_eq!(resolve(&item, Field::Name, Lang::Jp), "プレーン");
        assert_eq!(resolve(&item, Field::Name, Lang::En), "Plain");
    }

    #[test]
    fn resolve_skips_empty_active_entry() {
        let item = item(&[(Lang::Kr, ""), (Lang::En, "Plain")], &[]);
        assert_eq!(resolve(&item, Field::Name, Lang::Kr), "Plain");
    }

    #[test]
    fn resolve_falls_back_to_english() {
        let item = item(&[(Lang::En, "Almond")], &[]);
        assert_eq!(resolve(&item, Field::Name, Lang::Cn), "Almond");
    }

    #[test]
    fn resolve_falls_back_to_first_available() {
        let item = item(&[(Lang::Kr, "아몬드")], &[]);
        assert_eq!(resolve(&item, Field::Name, Lang::Jp), "아몬드");
    }

    #[test]
    fn resolve_returns_literals_for_empty_mappings() {
        let item = item(&[], &[]);
        assert_eq!(resolve(&item, Field::Name, Lang::Jp), "Item");
        assert_eq!(resolve(&item, Field::Description, Lang::Jp), "");
    }

    #[test]
    fn fallback_chain_order_is_fixed() {
        assert_eq!(
            fallback_chain(Lang::Cn),
            [
                FallbackStep::Active(Lang::Cn),
                FallbackStep::English,
                FallbackStep::FirstAvailable,
            ]
        );
    }

    #[test]
    fn catalog_names_resolve_non_empty_everywhere() {
        for item in catalog::menu().all() {
            for lang in SUPPORTED_LANGS {
                assert!(
                    !resolve(item, Field::Name, lang).is_empty(),
                    "{} has an empty name in {}",
                    item.key,
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn parse_tolerates_case_and_region_tags() {
        for (raw, expected) in [
            ("JP", Some(Lang::Jp)),
            ("ja-JP", Some(Lang::Jp)),
            ("en_US", Some(Lang::En)),
            ("zh-CN", Some(Lang::Cn)),
            ("ko", Some(Lang::Kr)),
            (" kr ", Some(Lang::Kr)),
            ("fr", None),
            ("", None),
        ] {
            assert_eq!(Lang::parse(raw), expected, "parsing {raw:?}");
        }
    }

    #[test]
    fn language_cycle_visits_all_four() {
        let mut lang = Lang::Jp;
        for expected in [Lang::En, Lang::Cn, Lang::Kr, Lang::Jp] {
            lang = lang.next();
            assert_eq!(lang, expected);
        }
    }
}

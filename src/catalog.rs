//! Static menu content for the Tenjin storefront.
//!
//! The catalog is immutable and built once at first use; the display layer
//! never mutates it and all localized lookups go through
//! [`crate::i18n::resolve`].

use std::sync::LazyLock;

use crate::i18n::{Lang, LocalizedText};

/// One menu entry as shown on a card.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Unique key, also the ledger and analytics identifier.
    pub key: &'static str,
    pub emoji: &'static str,
    pub name: LocalizedText,
    pub desc: LocalizedText,
    /// Price in yen.
    pub price: u32,
    /// Optional promo badge, e.g. the seasonal "Limited" tag.
    pub tag: Option<&'static str>,
}

/// The two menu sections rendered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Seasonal,
    Classic,
}

impl SectionKind {
    /// Analytics target id, matching the section anchors of the web page.
    pub fn target(self) -> &'static str {
        match self {
            SectionKind::Seasonal => "seasonal",
            SectionKind::Classic => "classic",
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    pub seasonal: Vec<MenuItem>,
    pub classic: Vec<MenuItem>,
}

impl Catalog {
    pub fn section(&self, kind: SectionKind) -> &[MenuItem] {
        match kind {
            SectionKind::Seasonal => &self.seasonal,
            SectionKind::Classic => &self.classic,
        }
    }

    /// All items, seasonal first, in menu order.
    pub fn all(&self) -> impl Iterator<Item = &MenuItem> {
        self.seasonal.iter().chain(self.classic.iter())
    }

    pub fn get(&self, key: &str) -> Option<&MenuItem> {
        self.all().find(|item| item.key == key)
    }
}

/// The storefront menu.
pub fn menu() -> &'static Catalog {
    static MENU: LazyLock<Catalog> = LazyLock::new(build_menu);
    &MENU
}

fn text(entries: &[(Lang, &'static str)]) -> LocalizedText {
    entries.iter().copied().collect()
}

fn build_menu() -> Catalog {
    Catalog {
        seasonal: vec![MenuItem {
            key: "matcha",
            emoji: "🍵🥐",
            name: text(&[
                (Lang::Jp, "抹茶クロワッサン"),
                (Lang::En, "Matcha"),
                (Lang::Cn, "抹茶牛角包"),
                (Lang::Kr, "말차 크루아상"),
            ]),
            desc: text(&[
                (Lang::Jp, "今だけの抹茶風味。"),
                (Lang::En, "Seasonal matcha flavor."),
                (Lang::Cn, "季节限定抹茶风味。"),
                (Lang::Kr, "시즌 한정 말차 풍미."),
            ]),
            price: 340,
            tag: Some("Limited"),
        }],
        classic: vec![
            MenuItem {
                key: "plain",
                emoji: "🥐",
                name: text(&[
                    (Lang::Jp, "プレーン"),
                    (Lang::En, "Plain"),
                    (Lang::Cn, "原味"),
                    (Lang::Kr, "플레인"),
                ]),
                desc: text(&[
                    (Lang::Jp, "サクッとふんわりの王道。"),
                    (Lang::En, "Crispy outside, fluffy inside."),
                    (Lang::Cn, "外酥内软的经典。"),
                    (Lang::Kr, "겉바속촉 클래식."),
                ]),
                price: 220,
                tag: None,
            },
            MenuItem {
                key: "choco",
                emoji: "🍫🥐",
                name: text(&[
                    (Lang::Jp, "チョコレート"),
                    (Lang::En, "Chocolate"),
                    (Lang::Cn, "巧克力"),
                    (Lang::Kr, "초콜릿"),
                ]),
                desc: text(&[
                    (Lang::Jp, "とろける甘さ。"),
                    (Lang::En, "Melty sweetness."),
                    (Lang::Cn, "入口即化的甜味。"),
                    (Lang::Kr, "녹아드는 달콤함."),
                ]),
                price: 280,
                tag: None,
            },
            MenuItem {
                key: "sweetpotato",
                emoji: "🍠🥐",
                name: text(&[
                    (Lang::Jp, "さつま芋"),
                    (Lang::En, "Sweet Potato"),
                    (Lang::Cn, "红薯"),
                    (Lang::Kr, "고구마"),
                ]),
                desc: text(&[
                    (Lang::Jp, "ほっくり甘い芋の味わい。"),
                    (Lang::En, "Cozy sweet potato flavor."),
                    (Lang::Cn, "绵密香甜的红薯味。"),
                    (Lang::Kr, "달콤한 고구마 맛."),
                ]),
                price: 320,
                tag: None,
            },
            MenuItem {
                key: "mentaiko",
                emoji: "🐟🥐",
                name: text(&[
                    (Lang::Jp, "明太子"),
                    (Lang::En, "Mentaiko"),
                    (Lang::Cn, "明太子"),
                    (Lang::Kr, "멘타이코"),
                ]),
                desc: text(&[
                    (Lang::Jp, "ピリ辛の明太子。"),
                    (Lang::En, "Spicy cod roe."),
                    (Lang::Cn, "微辣明太子。"),
                    (Lang::Kr, "매콤한 명태알."),
                ]),
                price: 330,
                tag: None,
            },
            MenuItem {
                key: "almond",
                emoji: "🌰🥐",
                name: text(&[
                    (Lang::Jp, "アーモンド"),
                    (Lang::En, "Almond"),
                    (Lang::Cn, "杏仁"),
                    (Lang::Kr, "아몬드"),
                ]),
                desc: text(&[
                    (Lang::Jp, "香ばしいナッツ風味。"),
                    (Lang::En, "Nutty flavor."),
                    (Lang::Cn, "坚果香味。"),
                    (Lang::Kr, "고소한 너트 풍미."),
                ]),
                price: 300,
                tag: None,
            },
            MenuItem {
                key: "custard",
                emoji: "🍮🥐",
                name: text(&[
                    (Lang::Jp, "カスタード"),
                    (Lang::En, "Custard"),
                    (Lang::Cn, "卡仕达"),
                    (Lang::Kr, "커스터드"),
                ]),
                desc: text(&[
                    (Lang::Jp, "やさしい甘さ。"),
                    (Lang::En, "Gentle sweetness."),
                    (Lang::Cn, "柔和甜味。"),
                    (Lang::Kr, "은은한 단맛."),
                ]),
                price: 280,
                tag: None,
            },
            MenuItem {
                key: "applepie",
                emoji: "🍎🥐",
                name: text(&[
                    (Lang::Jp, "アップルパイ"),
                    (Lang::En, "Apple Pie"),
                    (Lang::Cn, "苹果派"),
                    (Lang::Kr, "애플 파이"),
                ]),
                desc: text(&[
                    (Lang::Jp, "りんごの甘酸っぱさ。"),
                    (Lang::En, "Sweet & tart apple."),
                    (Lang::Cn, "苹果的酸甜。"),
                    (Lang::Kr, "사과의 달콤상큼."),
                ]),
                price: 350,
                tag: None,
            },
            MenuItem {
                key: "bread",
                emoji: "🍞",
                name: text(&[
                    (Lang::Jp, "食パン"),
                    (Lang::En, "Shokupan"),
                    (Lang::Cn, "吐司"),
                    (Lang::Kr, "식빵"),
                ]),
                desc: text(&[
                    (Lang::Jp, "ふんわり食感。"),
                    (Lang::En, "Soft & fluffy."),
                    (Lang::Cn, "松软口感。"),
                    (Lang::Kr, "부드럽고 폭신."),
                ]),
                price: 400,
                tag: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn menu_has_expected_sections() {
        let menu = menu();
        assert_eq!(menu.seasonal.len(), 1);
        assert_eq!(menu.classic.len(), 8);
    }

    #[test]
    fn item_keys_are_unique() {
        let mut seen = HashSet::new();
        for item in menu().all() {
            assert!(seen.insert(item.key), "duplicate key {}", item.key);
        }
    }

    #[test]
    fn every_item_has_an_english_name() {
        for item in menu().all() {
            assert!(
                item.name.get(&Lang::En).is_some_and(|name| !name.is_empty()),
                "{} is missing an EN name",
                item.key
            );
        }
    }

    #[test]
    fn lookup_by_key_spans_both_sections() {
        let menu = menu();
        assert!(menu.get("matcha").is_some());
        assert!(menu.get("bread").is_some());
        assert!(menu.get("croissant-supreme").is_none());
    }
}

//! Mock Data
//!
//! Deterministic fixture data served by the demo store.

use chrono::{DateTime, Duration, Utc};

use crate::models::{ApplicationItem, ItemStatus, ListItem};

const TITLES: &[&str] = &[
    "Alipay",
    "Angular",
    "Ant Design",
    "Ant Design Pro",
    "Bootstrap",
    "React",
    "Vue",
    "Webpack",
];

const LOGOS: &[&str] = &[
    "https://gw.alipayobjects.com/zos/rmsportal/WdGqmHpayyMjiEhcKoVE.png",
    "https://gw.alipayobjects.com/zos/rmsportal/zOsKZmFRdUtvpqCImOVY.png",
    "https://gw.alipayobjects.com/zos/rmsportal/dURIMkkrRFpPgTuzkwnB.png",
    "https://gw.alipayobjects.com/zos/rmsportal/sfjbOqnsXXJgNCjCzDBL.png",
    "https://gw.alipayobjects.com/zos/rmsportal/siCrBXXhmvTQGWPNLBow.png",
    "https://gw.alipayobjects.com/zos/rmsportal/kZzEzemZyKLKFsojXItE.png",
    "https://gw.alipayobjects.com/zos/rmsportal/ComBAopevLwENQdKWiIn.png",
    "https://gw.alipayobjects.com/zos/rmsportal/nxkuOJlFJuAUhzlMTCEe.png",
];

const DESCRIPTIONS: &[&str] = &[
    "Things that move the world forward.",
    "Small steps add up to long distances.",
    "Design is how it works.",
    "Make the complex simple.",
    "Every release starts with a plan.",
];

const OWNERS: &[&str] = &["Fu Xiaoxiao", "Qu Lili", "Lin Dongdong", "Zhou Xingxing", "Wu Jiahao"];

const STATUSES: &[ItemStatus] = &[ItemStatus::Active, ItemStatus::Exception, ItemStatus::Normal];

/// Fixed reference time so fixtures are reproducible
fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(1_600_000_000_000).unwrap_or_default()
}

pub fn fake_list_item(i: usize) -> ListItem {
    ListItem {
        id: format!("fake-list-{}", i),
        title: TITLES[i % TITLES.len()].to_string(),
        sub_description: DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string(),
        owner: OWNERS[i % OWNERS.len()].to_string(),
        created_at: epoch() - Duration::hours(2 * i as i64),
        percent: (50 + (i * 37) % 51) as u8,
        status: STATUSES[i % STATUSES.len()],
        logo: LOGOS[i % LOGOS.len()].to_string(),
        href: "https://ant.design".to_string(),
    }
}

pub fn fake_list(count: usize) -> Vec<ListItem> {
    (0..count).map(fake_list_item).collect()
}

pub fn fake_applications(count: usize) -> Vec<ApplicationItem> {
    (0..count)
        .map(|i| ApplicationItem {
            id: format!("fake-app-{}", i),
            title: TITLES[i % TITLES.len()].to_string(),
            avatar: LOGOS[i % LOGOS.len()].to_string(),
            active_user: Some((100_000 + (i * 26_017) % 100_000) as f64),
            new_user: Some((1_000 + (i * 733) % 1_000) as f64),
        })
        .collect()
}

//! Curated seed stories for bootstrapping a newsroom.
//!
//! All records are fictional demonstration content: composite places,
//! organisations and people, not reporting. They give a fresh deployment a
//! category- and region-diverse population to exercise the pipeline and the
//! quality gate against.

use chrono::{TimeZone, Utc};

use newswell_common::{Article, ArticleStatus, Category};

#[allow(clippy::too_many_arguments)]
fn story(
    slug: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    author: &str,
    category: Category,
    tags: &[&str],
    location: &str,
    validation_score: f32,
    community_voices: u32,
    (year, month, day): (i32, u32, u32),
) -> Article {
    Article {
        id: None,
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: author.to_string(),
        published_at: Utc
            .with_ymd_and_hms(year, month, day, 9, 0, 0)
            .single()
            .expect("valid seed date"),
        source_url: None,
        status: ArticleStatus::Published,
        location: Some(location.to_string()),
        validation_score: Some(validation_score),
        community_voices,
        moderation_note: None,
    }
}

/// The fixed curated record set the population service seeds from.
pub fn curated_stories() -> Vec<Article> {
    vec![
        story(
            "tenants-union-wins-repairs-agreement",
            "Tenants Union Wins Repairs Agreement After Eight-Month Campaign",
            "Residents of three estates secured a binding repairs schedule and an independent damp survey after organising floor by floor.",
            "# Tenants Union Wins Repairs Agreement\n\nAfter eight months of door-knocking, packed residents' meetings and two rent strikes, the Eastfield Tenants Union has signed a binding repairs agreement covering 420 homes.\n\nThe agreement sets a published schedule for roof and window repairs and commissions an independent damp survey, with results shared directly with residents. \"We stopped being case numbers and started being a union,\" one member told the assembly.",
            "Amara Osei",
            Category::Organizing,
            &["housing", "organizing", "justice"],
            "London",
            4.8,
            9,
            (2024, 1, 18),
        ),
        story(
            "community-kitchen-seven-nights",
            "Community Kitchen Expands to Seven Nights a Week",
            "What began as a Sunday pop-up now serves hot meals every evening, run entirely by neighbourhood volunteers.",
            "# Community Kitchen Expands to Seven Nights a Week\n\nThe Moss Lane Community Kitchen has moved to a seven-night schedule, serving around 120 meals an evening from the church hall it shares with a youth club.\n\nOrganisers credit a rota of sixty volunteers and standing donations from four local grocers. The kitchen runs on a pay-what-you-can basis and doubles as an advice drop-in on Tuesdays.",
            "Jordan Clarke",
            Category::Community,
            &["community", "mutual aid", "food"],
            "Manchester",
            4.6,
            7,
            (2024, 2, 3),
        ),
        story(
            "market-traders-oral-history",
            "Market Traders' Oral History Project Opens Its Archive",
            "Forty years of stall life recorded in the traders' own words, now free to listen to in the central library.",
            "# Market Traders' Oral History Project Opens Its Archive\n\nThe Bull Ring Voices project has deposited 85 recorded interviews with market traders past and present in the central library's listening room.\n\nThe recordings trace four decades of the market: price boards in pounds, shillings and pence, the arrival of new communities and cuisines, and the long fight over redevelopment. A touring listening booth visits neighbourhood libraries through the spring.",
            "Priya Nair",
            Category::HistoryAndCulture,
            &["heritage", "history", "community"],
            "Birmingham",
            4.7,
            6,
            (2023, 11, 12),
        ),
        story(
            "peer-support-circles-500-members",
            "Peer Support Circles Reach Five Hundred Members",
            "The men's mental health network that started with four chairs in a barbershop now runs eleven weekly circles.",
            "# Peer Support Circles Reach Five Hundred Members\n\nTalk It Out, the peer mental health network founded in the back room of a Chapeltown barbershop, has registered its five hundredth member.\n\nThe network now runs eleven weekly circles across the city, each led by trained volunteers with lived experience. Health visitors and GPs refer in, but most members arrive the same way the first four did: brought by a friend.",
            "Marcus Bell",
            Category::HealthAndWellness,
            &["health", "wellness", "community"],
            "Leeds",
            4.9,
            8,
            (2024, 3, 7),
        ),
        story(
            "mural-trail-neighbourhood-artists",
            "Mural Trail Puts Neighbourhood Artists on Twenty Walls",
            "A two-mile trail of commissioned murals, every one painted by an artist living within a mile of their wall.",
            "# Mural Trail Puts Neighbourhood Artists on Twenty Walls\n\nThe Easton Mural Trail opened this weekend with twenty commissioned works, each painted by an artist who lives within a mile of their wall.\n\nCommissions were decided by street-level ballots, and every artist ran a free workshop as part of their fee. A printed map is available from corner shops along the route, with an audio guide recorded by the artists themselves.",
            "Sofia Mendes",
            Category::ArtsAndCulture,
            &["arts", "culture", "visibility"],
            "Bristol",
            4.5,
            5,
            (2023, 9, 24),
        ),
        story(
            "youth-radio-collective-monthly-show",
            "Youth Radio Collective Launches Monthly Broadcast",
            "Sixteen young producers take over the community station's Friday evening slot with stories from their own streets.",
            "# Youth Radio Collective Launches Monthly Broadcast\n\nAfter a year of training nights, the Govanhill Youth Radio Collective broadcast its first monthly show on the community station's Friday evening slot.\n\nThe sixteen producers, aged 14 to 19, built the running order themselves: a history of the local baths campaign, interviews with three generations of one shopkeeping family, and a phone-in on school travel. The collective keeps full editorial control of the slot.",
            "Eilidh Grant",
            Category::MediaAndStorytelling,
            &["media", "youth", "storytelling"],
            "Glasgow",
            4.4,
            6,
            (2024, 1, 26),
        ),
        story(
            "repair-cafe-network-city-wide",
            "Repair Café Network Goes City-Wide",
            "Six neighbourhood repair cafés federate into a single network with a shared tool library and skills register.",
            "# Repair Café Network Goes City-Wide\n\nSheffield's six neighbourhood repair cafés have federated into a single network, pooling a tool library of nine hundred items and a register of volunteer fixers.\n\nThe network's first joint count logged 340 repairs in a month, from toasters and bike wheels to a 1970s sewing machine. Membership of the tool library is free; the waiting list for soldering workshops is currently three weeks.",
            "Tom Hartley",
            Category::Community,
            &["community", "repair", "environment"],
            "Sheffield",
            4.3,
            4,
            (2023, 10, 15),
        ),
        story(
            "allotment-project-derelict-land",
            "Allotment Project Turns Derelict Land Green",
            "A railway embankment written off for thirty years now feeds forty households and hosts a weekly growing club.",
            "# Allotment Project Turns Derelict Land Green\n\nThe Splott Growing Project has transformed a strip of derelict railway embankment into forty cultivated plots, two shared orchards and a rainwater system built from reclaimed tanks.\n\nThe land was secured on a meanwhile-use lease after three years of negotiation with the council. A weekly growing club pairs first-time growers with experienced plot-holders, and surplus produce goes to the food cooperative on the same street.",
            "Rhian Evans",
            Category::Organizing,
            &["environment", "food", "organizing"],
            "Cardiff",
            4.6,
            7,
            (2024, 4, 2),
        ),
        story(
            "night-shelter-volunteers-ten-years",
            "Night Shelter Volunteers Mark Ten Years of Winter Openings",
            "A decade of church-hall winter shelters, and the volunteer rota that has never once gone unfilled.",
            "# Night Shelter Volunteers Mark Ten Years of Winter Openings\n\nThe Ouseburn winter night shelter opened for its tenth season this week, staffed as ever by a volunteer rota that organisers say has never gone unfilled.\n\nOver the decade the shelter has hosted more than 1,100 guests across four church halls. This year it adds a morning advice surgery, run jointly with the law centre, aimed at moving guests into settled housing before spring.",
            "Claire Dodd",
            Category::Community,
            &["community", "housing", "solidarity"],
            "Newcastle",
            4.7,
            8,
            (2023, 12, 1),
        ),
        story(
            "cooperative-bookshop-opens",
            "Cooperative Bookshop Opens With Three Hundred Member-Owners",
            "Crowdfunded shares, volunteer shifts and a children's reading room: a bookshop owned by its street.",
            "# Cooperative Bookshop Opens With Three Hundred Member-Owners\n\nPage One, a cooperative bookshop owned by three hundred member-shareholders, opened its doors on Sneinton high street this Saturday.\n\nThe shop was funded by community shares averaging forty pounds each, fitted out by volunteer work parties, and stocks a wall of titles chosen by member ballot. A children's reading room at the back hosts story hours in four languages.",
            "Daniel Okafor",
            Category::ArtsAndCulture,
            &["arts", "culture", "cooperative"],
            "Nottingham",
            4.2,
            5,
            (2024, 2, 17),
        ),
        story(
            "walking-group-tackles-isolation",
            "Seafront Walking Group Tackles Winter Isolation",
            "Twice-weekly walks with no sign-up, no cost and a flask of tea at the halfway bench.",
            "# Seafront Walking Group Tackles Winter Isolation\n\nThe Kemptown Strollers meet twice a week at the pier, whatever the weather, for a flat two-mile walk with a tea stop at the halfway bench.\n\nThe group was started by two retired nurses who noticed the same faces sitting alone in the bus shelter each morning. There is no sign-up and no cost; the only rule is that nobody walks at the back alone. Winter attendance has settled at around thirty.",
            "June Akintola",
            Category::HealthAndWellness,
            &["health", "wellness", "older people"],
            "Brighton",
            4.5,
            6,
            (2024, 1, 9),
        ),
        story(
            "dockside-organizing-century-exhibition",
            "Exhibition Traces a Century of Dockside Organising",
            "Banners, minute books and strike photographs from a hundred years of waterfront campaigns, gathered from family attics.",
            "# Exhibition Traces a Century of Dockside Organising\n\nA new exhibition at the dockside museum gathers a century of waterfront campaigning: union banners restored by volunteer stitchers, minute books rescued from skips, and photographs loaned from family attics.\n\nThe curation team ran collection days in six neighbourhoods, and every item is captioned in the words of the family that kept it. A programme of talks pairs veteran organisers with current campaigns from the same streets.",
            "Siobhan Kelly",
            Category::HistoryAndCulture,
            &["heritage", "history", "organizing"],
            "Liverpool",
            4.8,
            9,
            (2023, 11, 30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_slugs_are_unique() {
        let stories = curated_stories();
        let slugs: HashSet<&str> = stories.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs.len(), stories.len());
    }

    #[test]
    fn seeds_span_categories_and_locations() {
        let stories = curated_stories();
        let categories: HashSet<Category> = stories.iter().map(|s| s.category).collect();
        let locations: HashSet<&str> = stories
            .iter()
            .filter_map(|s| s.location.as_deref())
            .collect();
        assert!(categories.len() >= 5);
        assert!(locations.len() >= 6);
    }

    #[test]
    fn seeds_carry_validation_metadata() {
        for story in curated_stories() {
            assert!(story.validation_score.is_some(), "{} unscored", story.slug);
            assert!(story.community_voices > 0, "{} has no voices", story.slug);
            assert!(story.source_url.is_none());
        }
    }
}

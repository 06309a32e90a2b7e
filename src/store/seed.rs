//! The seeded article fixture.
//!
//! Thirteen articles across all eight sections. Ids and publication dates
//! are fixed so derived views (latest, breaking) and bookmark persistence
//! are deterministic across runs. Slugs are derived from titles at seed
//! time, so the slug invariant holds for seeded data the same way it holds
//! for admin-saved data.

use chrono::NaiveDate;

use super::types::{Article, Section};
use crate::util::slugify;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are compile-time constants; invalid ones are a programmer error.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    author: &str,
    author_image: &str,
    published: NaiveDate,
    image_url: &str,
    category: Section,
    tags: &[&str],
    read_time: u32,
    featured: bool,
    trending: bool,
    views: u64,
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        slug: slugify(title),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        author_image: Some(author_image.to_string()),
        date: published,
        image_url: image_url.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        read_time: Some(read_time),
        featured,
        trending,
        views: Some(views),
    }
}

/// Build the seeded article list in catalogue order.
pub fn articles() -> Vec<Article> {
    vec![
        article(
            "k2f9x1a",
            "Government Announces New Economic Reform Package",
            "The government has unveiled a comprehensive economic reform package aimed at boosting growth and addressing inflation concerns.",
            "The government today announced a comprehensive economic reform package that aims to revitalize the economy and address growing concerns about inflation. The package includes tax incentives for small businesses, infrastructure development projects, and measures to control rising prices of essential commodities.\n\nFinance Minister stated that these reforms are expected to create thousands of jobs and stimulate economic growth by at least 2% in the coming fiscal year. Opposition leaders, however, have criticized the package, calling it \"insufficient\" and \"poorly targeted.\"\n\nEconomists have mixed opinions about the effectiveness of these measures, with some praising the focus on small businesses while others expressing concerns about the fiscal deficit implications.",
            "Rajesh Sharma",
            "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 9, 14),
            "https://images.pexels.com/photos/3943716/pexels-photo-3943716.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Economy,
            &["economy", "reform", "government", "inflation"],
            4,
            true,
            false,
            1240,
        ),
        article(
            "m7q3r8b",
            "Supreme Court Ruling Changes Election Campaign Regulations",
            "A landmark Supreme Court decision has significantly altered the regulations governing election campaigns, with far-reaching implications.",
            "In a landmark decision, the Supreme Court has ruled 5-4 to overturn previous regulations on election campaign financing. The ruling, which has significant implications for upcoming elections, removes several restrictions on campaign donations and advertising.\n\nChief Justice explained that the decision was based on constitutional protections of free speech, stating that \"political speech must prevail against laws that would suppress it.\" Dissenting justices warned that the ruling could lead to undue influence of wealthy donors on the electoral process.\n\nPolitical analysts suggest this ruling will dramatically change campaign strategies in the upcoming election cycle, potentially leading to record spending on political advertisements.",
            "Amrita Patel",
            "https://images.pexels.com/photos/3796217/pexels-photo-3796217.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 11, 2),
            "https://images.pexels.com/photos/1550337/pexels-photo-1550337.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Politics,
            &["supreme court", "election", "campaign", "ruling"],
            5,
            true,
            true,
            2350,
        ),
        article(
            "p4w8n2c",
            "Human Rights Commission Reports Rise in Digital Privacy Violations",
            "A new report highlights increasing concerns about digital privacy breaches and their impact on human rights.",
            "The National Human Rights Commission has released a comprehensive report documenting a 32% increase in digital privacy violations over the past year. The report highlights growing concerns about surveillance, data breaches, and online harassment.\n\nCommission Chairperson emphasized that \"digital rights are human rights\" and called for stronger legislative frameworks to protect citizens in the digital space. The report specifically mentions the need for better regulation of social media platforms and data collection practices by both government agencies and private corporations.\n\nCivil liberties organizations have welcomed the report, calling it a \"wake-up call\" for policymakers to address the evolving challenges in protecting privacy rights in the digital age.",
            "Binod Thapa",
            "https://images.pexels.com/photos/775358/pexels-photo-775358.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 6, 21),
            "https://images.pexels.com/photos/5380642/pexels-photo-5380642.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Rights,
            &["human rights", "privacy", "digital", "data"],
            6,
            false,
            false,
            1780,
        ),
        article(
            "t9c5v1d",
            "Climate Summit Ends with New Global Emissions Agreement",
            "World leaders have reached a historic agreement to reduce carbon emissions following two weeks of intense negotiations.",
            "After two weeks of intense negotiations, the International Climate Summit has concluded with a historic agreement to reduce global carbon emissions by 45% by 2030. The pact, signed by 192 countries, includes specific targets for different economic sectors and financial commitments to support developing nations in their transition to cleaner energy sources.\n\nEnvironmental activists have cautiously welcomed the agreement while emphasizing the need for accountability mechanisms to ensure countries meet their pledges. Several major fossil fuel-producing nations secured compromises that allow for gradual phase-outs rather than immediate cuts.\n\nThe agreement also establishes a $100 billion annual fund to support climate adaptation and mitigation efforts in vulnerable regions, addressing a key demand from developing countries.",
            "Sarita Giri",
            "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 11, 19),
            "https://images.pexels.com/photos/2990650/pexels-photo-2990650.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::World,
            &["climate", "emissions", "global", "agreement"],
            7,
            true,
            false,
            3420,
        ),
        article(
            "z1h6j4e",
            "Tech Giant Unveils Revolutionary AI Healthcare System",
            "A cutting-edge artificial intelligence system promises to transform healthcare delivery and improve patient outcomes.",
            "Global technology leader MediTech has unveiled a revolutionary artificial intelligence system designed to transform healthcare delivery. The AI platform, named \"HealthGuard,\" can analyze medical images, predict patient outcomes, and recommend personalized treatment plans with unprecedented accuracy.\n\nInitial clinical trials show the system outperforming human specialists in diagnosing several common conditions, including pneumonia and diabetic retinopathy. The company claims the technology could reduce diagnostic errors by up to 40% while significantly decreasing healthcare costs.\n\nMedical ethicists have raised questions about data privacy, algorithmic bias, and the changing role of healthcare professionals as AI systems become more integrated into clinical practice. Regulatory agencies are currently reviewing the technology before approving it for widespread adoption.",
            "Pradeep Karki",
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 10, 5),
            "https://images.pexels.com/photos/3825584/pexels-photo-3825584.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Technology,
            &["AI", "healthcare", "technology", "innovation"],
            5,
            false,
            true,
            4560,
        ),
        article(
            "b8s2k7f",
            "New Study Reveals Surprising Benefits of Traditional Herbal Medicine",
            "Research finds evidence supporting the efficacy of several traditional remedies for common health conditions.",
            "A comprehensive study published in the International Journal of Medical Research has found significant evidence supporting the efficacy of several traditional herbal remedies for common health conditions. The research, conducted over five years, evaluated the effects of 12 commonly used medicinal plants on various ailments including inflammation, digestive disorders, and respiratory conditions.\n\nLead researcher Dr. Anita Gurung explained that modern scientific methods confirmed the therapeutic properties of these plants, many of which have been used in traditional medicine for centuries. \"These findings bridge the gap between traditional knowledge and modern medicine,\" she stated.\n\nPharmaceutical companies have shown interest in the research, with several already exploring the development of new drugs based on the active compounds identified in these traditional remedies.",
            "Manisha Rai",
            "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 4, 12),
            "https://images.pexels.com/photos/6693654/pexels-photo-6693654.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Health,
            &["health", "medicine", "research", "traditional"],
            4,
            false,
            false,
            2150,
        ),
        article(
            "d3y7m5g",
            "Opinion: The Digital Divide Is Widening - We Must Act Now",
            "As technology advances, the gap between the connected and unconnected grows, threatening to leave millions behind.",
            "As we celebrate remarkable technological advances, we must confront an uncomfortable truth: the digital divide is widening at an alarming rate. While urban centers enjoy 5G networks and smart city infrastructure, rural communities struggle with basic connectivity, and this disparity threatens to reinforce existing socioeconomic inequalities.\n\nRecent statistics show that nearly 40% of our rural population lacks reliable internet access, effectively excluding them from digital education resources, telehealth services, and remote work opportunities that have become essential in the post-pandemic world.\n\nThe solution requires a multifaceted approach: government investment in rural broadband infrastructure, private sector initiatives to provide affordable devices and services, and educational programs to develop digital literacy. Most importantly, we need to recognize internet access as a fundamental right, not a luxury.\n\nIf we fail to address this digital divide now, we risk creating a permanent underclass of citizens unable to participate in our increasingly digital society and economy.",
            "Prof. Hari Bahadur",
            "https://images.pexels.com/photos/834863/pexels-photo-834863.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 8, 3),
            "https://images.pexels.com/photos/4144179/pexels-photo-4144179.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Opinion,
            &["digital divide", "technology", "inequality", "opinion"],
            6,
            false,
            false,
            1980,
        ),
        article(
            "g6u1p9h",
            "Local Film Festival Showcases Emerging Talent",
            "The annual Urban Film Festival returns with an impressive lineup of independent films and new directors.",
            "The 15th Annual Urban Film Festival opened yesterday with a record number of submissions and attendance, showcasing the work of emerging filmmakers from across the region. This year's festival features 45 films across various genres, with a particular focus on social issues and cultural identity.\n\nFestival director Sunita Adhikari noted that this year's submissions reflect a growing confidence among young filmmakers to tackle complex themes. \"We're seeing bold, innovative storytelling that pushes boundaries while remaining deeply rooted in our cultural context,\" she said.\n\nThe festival also includes workshops, panel discussions, and networking events designed to support the development of the local film industry. Several international distributors and production companies are in attendance, offering opportunities for filmmakers to secure broader distribution for their work.",
            "Kiran Shahi",
            "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 3, 18),
            "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Entertainment,
            &["film", "festival", "culture", "arts"],
            3,
            false,
            false,
            1650,
        ),
        article(
            "w5e9t3j",
            "Corruption Allegations Surface in Infrastructure Project",
            "Documents reveal potential misuse of funds in major government infrastructure development.",
            "Leaked documents have revealed serious allegations of corruption in the Central Highway Project, a flagship infrastructure initiative with a budget of over $500 million. The documents, verified by independent analysts, suggest systematic overpricing of materials, ghost employees on payroll, and kickbacks to officials overseeing the project.\n\nAn investigation by NewsDesk found that actual construction costs were approximately 30% lower than reported figures, with the difference allegedly diverted through a network of shell companies linked to senior officials and their relatives.\n\nThe Ministry of Infrastructure has announced the formation of a high-level committee to investigate these allegations, while opposition parties have called for the resignation of the minister and criminal prosecution of those involved. Anti-corruption activists are planning nationwide protests to demand greater transparency in government projects.",
            "Investigation Team",
            "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 12, 7),
            "https://images.pexels.com/photos/687574/pexels-photo-687574.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Politics,
            &["corruption", "investigation", "infrastructure", "government"],
            8,
            true,
            true,
            5870,
        ),
        article(
            "r2a4q8k",
            "Market Analysis: Inflation Concerns Grow as Economy Shows Mixed Signals",
            "Economic experts warn of persistent inflation despite recent growth indicators in key sectors.",
            "Economic analysts are expressing growing concerns about inflation despite recent positive indicators in manufacturing and services sectors. The latest data shows consumer prices rising at an annual rate of 6.8%, the highest in over a decade, while wage growth remains stagnant at 2.3%.\n\nFinancial markets have responded with volatility, with the main stock index dropping 2.4% yesterday as investors adjust their expectations for potential interest rate hikes. Central Bank officials have signaled they might accelerate their timeline for monetary policy adjustment if inflation continues to exceed targets.\n\nSmall business owners report significant challenges with rising input costs and difficulties in hiring, with many forced to pass increased costs to consumers. \"We're caught between higher supplier prices and customers who are already stretched thin,\" explained local retailer Anil Shrestha.",
            "Economist Team",
            "https://images.pexels.com/photos/937481/pexels-photo-937481.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 10, 28),
            "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Economy,
            &["economy", "inflation", "market", "analysis"],
            5,
            false,
            false,
            2340,
        ),
        article(
            "n7i3x6l",
            "Women's Rights Organization Launches Rural Empowerment Initiative",
            "A new program aims to provide economic opportunities and legal support for women in underserved communities.",
            "The Women's Empowerment Coalition has launched an ambitious initiative targeting rural communities, with programs focused on economic independence, legal rights, and leadership development for women. The three-year project, funded by a $2.5 million grant, will operate in 50 villages across five districts.\n\nThe initiative includes microfinance opportunities, vocational training, and mobile legal aid clinics to address issues like domestic violence, property rights, and workplace discrimination. \"Many rural women face multiple barriers to equality, from limited education to entrenched cultural norms,\" explained program director Maya Tamang.\n\nEarly response has been positive, with over 500 women enrolling in the first phase of the program. Local government officials have pledged support, recognizing the potential economic benefits of increasing women's participation in the formal economy.",
            "Sabina Rana",
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 5, 9),
            "https://images.pexels.com/photos/6457391/pexels-photo-6457391.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Rights,
            &["women", "rights", "empowerment", "rural"],
            4,
            false,
            false,
            1850,
        ),
        article(
            "f4o8z2m",
            "International Trade Tensions Escalate with New Tariffs",
            "Major economies implement retaliatory tariffs, raising concerns about global economic growth.",
            "Trade tensions between major global economies have escalated following the introduction of new tariffs on a range of agricultural and manufactured goods. The measures, which affect approximately $75 billion in trade, represent a significant escalation in the ongoing trade disputes that have destabilized global markets.\n\nEconomic analysts warn that continued trade hostilities could reduce global GDP growth by 0.5% over the next year and disrupt supply chains across multiple industries. Small and medium-sized businesses are particularly vulnerable to these disruptions, with many reporting difficulties in sourcing materials and accessing export markets.\n\nDiplomatic efforts to resolve the disputes have stalled, with both sides demanding concessions before returning to negotiations. The International Trade Organization has called for restraint, emphasizing that \"a cycle of retaliation serves no country's long-term interests.\"",
            "Dipendra Ojha",
            "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 11, 27),
            "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::World,
            &["trade", "tariffs", "economy", "international"],
            6,
            false,
            true,
            2870,
        ),
        article(
            "j9l5c1n",
            "Remittance Inflows Reach Record High Despite Global Slowdown",
            "Money sent home by migrant workers hit an all-time high last quarter, cushioning households against rising prices.",
            "Remittance inflows reached a record $2.9 billion last quarter, according to figures released by the Central Bank, defying predictions of a slowdown tied to weakening labor markets abroad. The inflows, sent home by an estimated 2.1 million workers overseas, remain the single largest source of foreign currency for the economy.\n\nAnalysts attribute the surge to favorable exchange rates and a shift toward formal banking channels, which now carry nearly 80% of transfers compared to 60% five years ago. Households report using the funds primarily for food, education, and loan repayments as consumer prices continue to climb.\n\nEconomists caution that reliance on remittances leaves the economy exposed to conditions in host countries, and renewed calls are being made for policies that channel a portion of the inflows into productive investment rather than consumption.",
            "Nirmala Basnet",
            "https://images.pexels.com/photos/259200/pexels-photo-259200.jpeg?auto=compress&cs=tinysrgb&w=100",
            date(2023, 7, 16),
            "https://images.pexels.com/photos/4386431/pexels-photo-4386431.jpeg?auto=compress&cs=tinysrgb&w=600",
            Section::Economy,
            &["remittance", "economy", "labor", "migration"],
            4,
            true,
            false,
            2620,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_has_thirteen_articles() {
        assert_eq!(articles().len(), 13);
    }

    #[test]
    fn test_fixture_ids_unique() {
        let arts = articles();
        let ids: HashSet<_> = arts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), arts.len());
    }

    #[test]
    fn test_fixture_slugs_unique_and_derived() {
        let arts = articles();
        let slugs: HashSet<_> = arts.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs.len(), arts.len());
        for a in &arts {
            assert_eq!(a.slug, slugify(&a.title), "slug mismatch for {}", a.id);
        }
    }

    #[test]
    fn test_fixture_dates_distinct() {
        // Distinct dates keep the latest-N ordering unambiguous
        let arts = articles();
        let dates: HashSet<_> = arts.iter().map(|a| a.date).collect();
        assert_eq!(dates.len(), arts.len());
    }

    #[test]
    fn test_fixture_flag_counts() {
        let arts = articles();
        assert_eq!(arts.iter().filter(|a| a.featured).count(), 5);
        assert_eq!(arts.iter().filter(|a| a.trending).count(), 4);
    }
}

use leptos::prelude::*;

#[derive(Debug, Clone)]
struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    image: &'static str,
    social: Vec<(&'static str, &'static str)>,
}

struct CompanyValue {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Alex Johnson",
            role: "CEO & Founder",
            bio: "Former professional soccer player with a passion for making sports accessible to everyone.",
            image: "https://randomuser.me/api/portraits/men/32.jpg",
            social: vec![
                ("fab fa-linkedin", "https://linkedin.com"),
                ("fab fa-twitter", "https://twitter.com"),
                ("fab fa-facebook", "https://facebook.com"),
            ],
        },
        TeamMember {
            name: "Samantha Lee",
            role: "CTO",
            bio: "Tech enthusiast with over 10 years of experience in building scalable platforms.",
            image: "https://randomuser.me/api/portraits/women/44.jpg",
            social: vec![
                ("fab fa-linkedin", "https://linkedin.com"),
                ("fab fa-twitter", "https://twitter.com"),
            ],
        },
        TeamMember {
            name: "Marcus Williams",
            role: "Head of Operations",
            bio: "Sports management expert who ensures smooth operations of all TurfBook facilities.",
            image: "https://randomuser.me/api/portraits/men/68.jpg",
            social: vec![
                ("fab fa-linkedin", "https://linkedin.com"),
                ("fab fa-facebook", "https://facebook.com"),
            ],
        },
        TeamMember {
            name: "Jessica Chen",
            role: "Marketing Director",
            bio: "Creative strategist who loves connecting sports enthusiasts with the perfect venues.",
            image: "https://randomuser.me/api/portraits/women/17.jpg",
            social: vec![
                ("fab fa-linkedin", "https://linkedin.com"),
                ("fab fa-twitter", "https://twitter.com"),
            ],
        },
    ]
}

const COMPANY_VALUES: [CompanyValue; 4] = [
    CompanyValue {
        title: "Accessibility",
        description: "We believe sports facilities should be accessible to everyone, regardless of skill level or background.",
        icon: "fas fa-globe",
    },
    CompanyValue {
        title: "Quality",
        description: "We maintain high standards for all the facilities listed on our platform to ensure the best experience.",
        icon: "fas fa-futbol",
    },
    CompanyValue {
        title: "Community",
        description: "We foster a sense of community among sports enthusiasts, bringing people together through the love of the game.",
        icon: "fas fa-people-group",
    },
    CompanyValue {
        title: "Sustainability",
        description: "We promote eco-friendly practices in sports facility management and operations.",
        icon: "fas fa-tree",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div>
            <section class="min-h-[50vh] flex items-center justify-center bg-gradient-to-r from-purple-50 to-fuchsia-50">
                <div class="max-w-6xl mx-auto px-4 text-center">
                    <h1 class="text-5xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-purple-700 to-fuchsia-600 bg-clip-text text-transparent">
                        "About TurfBook"
                    </h1>
                    <p class="text-xl text-gray-500">
                        "Connecting sports enthusiasts with the perfect playing fields since 2020."
                    </p>
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="bg-white shadow rounded-lg p-6">
                    <h2 class="text-3xl font-bold mb-4">"Our Story"</h2>
                    <p class="mb-4">
                        "TurfBook was born out of a simple frustration: finding and booking quality sports fields was unnecessarily complicated. Our founder, Alex Johnson, a former professional soccer player, experienced this challenge firsthand when organizing community games."
                    </p>
                    <p class="mb-4">
                        "In 2020, Alex assembled a team of sports enthusiasts and tech experts to create a platform that would simplify the process of discovering, comparing, and booking sports facilities. What started as a small project in Seattle has now expanded to serve communities across North America."
                    </p>
                    <p>
                        "Today, TurfBook connects thousands of players, teams, and event organizers with the perfect venues for their needs. We're proud to support local sports communities and help make sports more accessible to everyone."
                    </p>
                </div>
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <img
                        class="w-full h-full object-cover"
                        src="https://images.unsplash.com/photo-1531415074968-036ba1b575da?auto=format&fit=crop&w=1000&q=80"
                        alt="Cricket ground"
                    />
                </div>
            </section>

            <section class="bg-gray-50 py-12">
                <div class="max-w-6xl mx-auto px-4 grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="bg-gray-100 rounded-lg p-6 h-full">
                        <h2 class="text-3xl font-bold mb-4">"Our Mission"</h2>
                        <p class="mb-4">
                            "Our mission is to make sports accessible to everyone by providing a seamless platform for discovering and booking quality sports facilities. We believe that playing sports should be easy, enjoyable, and available to all, regardless of skill level or background."
                        </p>
                        <p>
                            "By connecting facility owners with players and teams, we're creating a vibrant ecosystem that promotes physical activity, community engagement, and the love of sports."
                        </p>
                    </div>
                    <div class="bg-gray-100 rounded-lg p-6 h-full">
                        <h2 class="text-3xl font-bold mb-4">"Our Vision"</h2>
                        <p class="mb-4">
                            "We envision a world where anyone can easily find and book the perfect sports venue, anytime, anywhere. A world where facility owners can maximize the use of their spaces, and where communities come together through the power of sports."
                        </p>
                        <p>
                            "By 2025, we aim to be the leading platform for sports facility bookings across North America, with a growing global presence, serving millions of sports enthusiasts and thousands of facility owners."
                        </p>
                    </div>
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-4 py-12">
                <h2 class="text-3xl font-bold text-center mb-2">"Our Values"</h2>
                <p class="text-center text-gray-500 mb-8">"These core principles guide everything we do at TurfBook."</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
                    {COMPANY_VALUES.iter().map(|value| view! {
                        <div class="bg-white shadow rounded-lg p-6 text-center hover:-translate-y-1 transition-transform">
                            <i class=format!("{} text-3xl text-purple-700 mb-3", value.icon)></i>
                            <h3 class="text-lg font-semibold mb-2">{value.title}</h3>
                            <p class="text-sm text-gray-500">{value.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="bg-gray-50 py-12">
                <div class="max-w-6xl mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-2">"Meet Our Team"</h2>
                    <p class="text-center text-gray-500 mb-8">"The people behind every booking."</p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6">
                        {team_members().into_iter().map(|member| view! { <TeamCard member/> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn TeamCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-hidden text-center">
            <img class="w-full h-56 object-cover" src=member.image alt=member.name/>
            <div class="p-4">
                <h3 class="text-lg font-semibold">{member.name}</h3>
                <p class="text-sm text-purple-700 mb-2">{member.role}</p>
                <p class="text-sm text-gray-500 mb-3">{member.bio}</p>
                <div class="flex justify-center gap-3">
                    {member.social.into_iter().map(|(icon, url)| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="text-gray-400 hover:text-purple-700">
                            <i class=icon></i>
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

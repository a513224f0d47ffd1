use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::effects::{LazyImage, ParallaxLayer, TiltCard};
use crate::components::forms::{ContactForm, NewsletterForm};
use crate::components::nav::Anchor;
use crate::components::reveal::{RevealKind, ScrollReveal};
use crate::components::typewriter::Typewriter;

const SERVICES: [(&str, &str, &str); 4] = [
    ("💻", "Pengembangan Web", "Situs dan aplikasi web yang cepat, aman, dan mudah dikelola."),
    ("📱", "Aplikasi Mobile", "Aplikasi Android dan iOS yang dirancang untuk pengguna Anda."),
    ("☁️", "Cloud & DevOps", "Infrastruktur yang andal dengan otomasi dari awal hingga rilis."),
    ("📊", "Konsultasi IT", "Strategi teknologi yang selaras dengan tujuan bisnis Anda."),
];

const STATS: [(u64, &str); 4] = [
    (150, "Proyek Selesai"),
    (80, "Klien Puas"),
    (12, "Tahun Pengalaman"),
    (25, "Tim Ahli"),
];

const FEATURES: [(&str, &str); 3] = [
    ("Tim Berpengalaman", "Insinyur yang sudah menangani ratusan proyek."),
    ("Proses Transparan", "Laporan kemajuan rutin di setiap tahap."),
    ("Dukungan Purna Jual", "Kami tetap mendampingi setelah peluncuran."),
];

const POSTS: [(&str, &str, &str); 3] = [
    ("/assets/blog-1.jpg", "Memilih Stack yang Tepat", "Panduan singkat memilih teknologi untuk produk baru."),
    ("/assets/blog-2.jpg", "Transformasi Digital UMKM", "Langkah awal membawa usaha kecil ke dunia digital."),
    ("/assets/blog-3.jpg", "Keamanan Aplikasi Web", "Kebiasaan sederhana yang mencegah kebocoran data."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="landing-page">
            <section id="home" class="hero">
                <ParallaxLayer />
                <div class="hero-content">
                    <h1 class="hero-title">{"Edammura Software Consultant"}</h1>
                    <p class="hero-subtitle">
                        <Typewriter text="Solusi perangkat lunak untuk bisnis yang terus bertumbuh." />
                    </p>
                    <Anchor href="#contact" class="btn btn-primary hero-cta">{"Konsultasi Gratis"}</Anchor>
                </div>
            </section>

            <section id="services" class="services">
                <h2 class="section-title">{"Layanan Kami"}</h2>
                <div class="services-grid">
                    {
                        for SERVICES.iter().enumerate().map(|(index, &(icon, title, text))| html! {
                            <ScrollReveal {index}>
                                <TiltCard class="service-card">
                                    <div class="service-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </TiltCard>
                            </ScrollReveal>
                        })
                    }
                </div>
            </section>

            <section id="about" class="about">
                <ParallaxLayer class="parallax-bg-light" />
                <ScrollReveal index={SERVICES.len()} delay={Some(0)}>
                    <h2 class="section-title">{"Tentang Kami"}</h2>
                    <p class="about-text">
                        {"Kami membantu perusahaan merancang, membangun, dan merawat produk digital sejak 2013."}
                    </p>
                </ScrollReveal>
                <div class="stats">
                    {
                        for STATS.iter().map(|&(target, label)| html! {
                            <div class="stat-item">
                                <Counter {target} />
                                <span class="stat-label">{label}</span>
                            </div>
                        })
                    }
                </div>
                <div class="features">
                    {
                        for FEATURES.iter().map(|&(title, text)| html! {
                            <ScrollReveal kind={RevealKind::Animate}>
                                <TiltCard class="feature-box">
                                    <h4>{title}</h4>
                                    <p>{text}</p>
                                </TiltCard>
                            </ScrollReveal>
                        })
                    }
                </div>
            </section>

            <section id="blog" class="blog">
                <h2 class="section-title">{"Artikel Terbaru"}</h2>
                <div class="blog-grid">
                    {
                        for POSTS.iter().enumerate().map(|(i, &(image, title, text))| html! {
                            <ScrollReveal index={SERVICES.len() + 1 + i}>
                                <TiltCard class="blog-card">
                                    <LazyImage src={image} alt={title} class="blog-image" />
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </TiltCard>
                            </ScrollReveal>
                        })
                    }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Hubungi Kami"}</h2>
                <ScrollReveal index={SERVICES.len() + 1 + POSTS.len()}>
                    <ContactForm />
                </ScrollReveal>
            </section>

            <footer class="footer">
                <div class="footer-newsletter">
                    <h4>{"Newsletter"}</h4>
                    <p>{"Dapatkan kabar dan artikel terbaru dari kami."}</p>
                    <NewsletterForm />
                </div>
                <p class="footer-copy">{"© Edammura Software Consultant"}</p>
            </footer>
        </main>
    }
}

//! The curated repository list.

use crate::{AwesomeRepo, Category};

const fn repo(
    owner: &'static str,
    name: &'static str,
    description: &'static str,
    stars: &'static str,
    language: &'static str,
    tags: &'static [&'static str],
) -> AwesomeRepo {
    AwesomeRepo {
        owner,
        name,
        description,
        stars,
        language,
        tags,
    }
}

#[rustfmt::skip]
pub(crate) static CATEGORIES: &[Category] = &[
    Category {
        id: "frontend",
        label: "Frontend",
        icon: "/>",
        repos: &[
            repo("facebook", "react", "The library for web and native user interfaces", "233k", "JavaScript", &["ui", "framework"]),
            repo("vuejs", "core", "The progressive JavaScript framework", "48k", "TypeScript", &["ui", "framework"]),
            repo("sveltejs", "svelte", "Cybernetically enhanced web apps", "81k", "JavaScript", &["ui", "compiler"]),
            repo("angular", "angular", "Deliver web apps with confidence", "97k", "TypeScript", &["ui", "framework"]),
            repo("solidjs", "solid", "A declarative, efficient, and flexible JavaScript library for building UIs", "33k", "TypeScript", &["ui", "reactive"]),
            repo("preactjs", "preact", "Fast 3kB React alternative with the same modern API", "37k", "JavaScript", &["ui", "lightweight"]),
            repo("lit", "lit", "Simple. Fast. Web Components.", "19k", "TypeScript", &["web-components", "ui"]),
            repo("alpinejs", "alpine", "A rugged, minimal framework for composing behavior directly in your markup", "29k", "JavaScript", &["ui", "lightweight"]),
            repo("htmx-org", "htmx", "High power tools for HTML", "42k", "JavaScript", &["hypermedia", "lightweight"]),
            repo("marko-js", "marko", "A declarative, HTML-based language that makes building web apps fun", "13k", "JavaScript", &["ui", "streaming"]),
            repo("hotwired", "turbo", "The speed of a single-page web application without having to write any JavaScript", "7k", "TypeScript", &["html", "lightweight"]),
        ],
    },
    Category {
        id: "meta-frameworks",
        label: "Meta Frameworks",
        icon: ">>",
        repos: &[
            repo("vercel", "next.js", "The React Framework", "130k", "JavaScript", &["react", "ssr", "fullstack"]),
            repo("nuxt", "nuxt", "The Intuitive Vue Framework", "56k", "TypeScript", &["vue", "ssr", "fullstack"]),
            repo("remix-run", "remix", "Build better websites with Remix", "31k", "TypeScript", &["react", "ssr"]),
            repo("withastro", "astro", "The web framework for content-driven websites", "49k", "TypeScript", &["static", "islands"]),
            repo("sveltejs", "kit", "Web development, streamlined", "19k", "JavaScript", &["svelte", "ssr"]),
            repo("analogjs", "analog", "The fullstack Angular meta-framework", "3k", "TypeScript", &["angular", "ssr"]),
            repo("gatsbyjs", "gatsby", "The best React-based framework for performance and scalability", "55k", "JavaScript", &["react", "static"]),
            repo("payloadcms", "payload", "The best way to build a modern backend + admin UI in Next.js", "30k", "TypeScript", &["cms", "nextjs"]),
            repo("redwoodjs", "redwood", "The App Framework for Startups — built on React, GraphQL, Prisma", "17k", "TypeScript", &["react", "fullstack"]),
        ],
    },
    Category {
        id: "css-styling",
        label: "CSS & Styling",
        icon: "#~",
        repos: &[
            repo("tailwindlabs", "tailwindcss", "A utility-first CSS framework for rapid UI development", "86k", "CSS", &["utility", "css"]),
            repo("unocss", "unocss", "The instant on-demand atomic CSS engine", "17k", "TypeScript", &["atomic", "css"]),
            repo("styled-components", "styled-components", "Visual primitives for the component age", "40k", "TypeScript", &["css-in-js", "react"]),
            repo("open-props", "open-props", "CSS custom properties to help accelerate adaptive and consistent design", "5k", "CSS", &["custom-properties", "design"]),
            repo("picocss", "pico", "Minimal CSS Framework for semantic HTML", "14k", "SCSS", &["classless", "minimal"]),
            repo("animate-css", "animate.css", "A cross-browser library of CSS animations", "81k", "CSS", &["animations", "css"]),
            repo("AllThingsSmitty", "css-protips", "A collection of tips to help take your CSS skills professional", "30k", "CSS", &["tips", "reference"]),
        ],
    },
    Category {
        id: "ui-components",
        label: "UI Components",
        icon: "[]",
        repos: &[
            repo("shadcn-ui", "ui", "Beautifully designed components built with Radix UI and Tailwind CSS", "82k", "TypeScript", &["react", "tailwind"]),
            repo("radix-ui", "primitives", "Radix Primitives is an open-source UI component library", "16k", "TypeScript", &["react", "headless"]),
            repo("chakra-ui", "chakra-ui", "Simple, Modular & Accessible UI Components for React", "38k", "TypeScript", &["react", "accessible"]),
            repo("mantinedev", "mantine", "A fully featured React components library", "27k", "TypeScript", &["react", "components"]),
            repo("ariakit", "ariakit", "Toolkit for building accessible web apps with React", "8k", "TypeScript", &["react", "accessible"]),
            repo("huntabyte", "shadcn-svelte", "shadcn/ui but for Svelte", "6k", "Svelte", &["svelte", "tailwind"]),
            repo("ant-design", "ant-design", "An enterprise-class UI design language and React UI library", "93k", "TypeScript", &["react", "enterprise"]),
            repo("element-plus", "element-plus", "A Vue.js 3 UI Library made by Element team", "25k", "TypeScript", &["vue", "components"]),
            repo("brillout", "awesome-react-components", "Curated list of React components and libraries", "47k", "Markdown", &["reference", "curated"]),
            repo("vuetifyjs", "vuetify", "Vue Component Framework — Material Design", "40k", "TypeScript", &["vue", "material"]),
        ],
    },
    Category {
        id: "backend",
        label: "Backend",
        icon: "::",
        repos: &[
            repo("expressjs", "express", "Fast, unopinionated, minimalist web framework for Node.js", "66k", "JavaScript", &["node", "http"]),
            repo("fastify", "fastify", "Fast and low overhead web framework for Node.js", "33k", "JavaScript", &["node", "http"]),
            repo("honojs", "hono", "Web framework built on Web Standards", "22k", "TypeScript", &["edge", "http"]),
            repo("elysiajs", "elysia", "Ergonomic framework for humans", "12k", "TypeScript", &["bun", "http"]),
            repo("nestjs", "nest", "A progressive Node.js framework for building server-side applications", "69k", "TypeScript", &["node", "enterprise"]),
            repo("django", "django", "The web framework for perfectionists with deadlines", "82k", "Python", &["python", "fullstack"]),
            repo("tiangolo", "fastapi", "Modern, fast, web framework for building APIs with Python", "82k", "Python", &["python", "async"]),
            repo("pallets", "flask", "The Python micro framework for building web applications", "69k", "Python", &["python", "micro"]),
            repo("gin-gonic", "gin", "Gin is a HTTP web framework written in Go", "80k", "Go", &["go", "http"]),
            repo("gofiber", "fiber", "Express-inspired web framework written in Go", "35k", "Go", &["go", "http"]),
            repo("labstack", "echo", "High performance, minimalist Go web framework", "30k", "Go", &["go", "http"]),
            repo("actix", "actix-web", "Actix Web is a powerful, pragmatic, and fast web framework for Rust", "22k", "Rust", &["rust", "http"]),
            repo("tokio-rs", "axum", "Ergonomic and modular web framework built with Tokio", "20k", "Rust", &["rust", "http"]),
            repo("spring-projects", "spring-boot", "Spring Boot helps you create production-grade Spring applications", "76k", "Java", &["java", "enterprise"]),
            repo("laravel", "laravel", "A web application framework with expressive, elegant syntax", "79k", "PHP", &["php", "fullstack"]),
            repo("strapi", "strapi", "Open-source Node.js Headless CMS to easily build customisable APIs", "65k", "TypeScript", &["cms", "node"]),
            repo("directus", "directus", "Turn any SQL database into an API and admin panel", "29k", "TypeScript", &["cms", "api"]),
            repo("Kong", "kong", "Cloud-native API gateway for microservices", "40k", "Lua", &["api-gateway", "cloud-native"]),
        ],
    },
    Category {
        id: "databases",
        label: "Databases",
        icon: "db",
        repos: &[
            repo("prisma", "prisma", "Next-generation ORM for Node.js & TypeScript", "41k", "TypeScript", &["orm", "typescript"]),
            repo("drizzle-team", "drizzle-orm", "Headless TypeScript ORM with a head", "26k", "TypeScript", &["orm", "typescript"]),
            repo("supabase", "supabase", "The open source Firebase alternative", "78k", "TypeScript", &["postgres", "baas"]),
            repo("pocketbase", "pocketbase", "Open source realtime backend in 1 file", "43k", "Go", &["sqlite", "baas"]),
            repo("turso-tech", "libsql", "libSQL is a fork of SQLite that is both open source and open contribution", "13k", "C", &["sqlite", "edge"]),
            repo("redis", "redis", "Redis is an in-memory database that persists on disk", "68k", "C", &["cache", "kv"]),
            repo("cockroachdb", "cockroach", "CockroachDB — the cloud native, distributed SQL database", "30k", "Go", &["distributed", "sql"]),
            repo("pingcap", "tidb", "TiDB is a distributed SQL database compatible with MySQL protocol", "38k", "Go", &["distributed", "mysql"]),
            repo("mongodb", "mongo", "The MongoDB Database", "27k", "C++", &["nosql", "document"]),
            repo("elastic", "elasticsearch", "Free and Open, Distributed, RESTful Search Engine", "71k", "Java", &["search", "analytics"]),
            repo("hasura", "graphql-engine", "Instant realtime GraphQL APIs on all your data", "31k", "TypeScript", &["graphql", "postgres"]),
            repo("ClickHouse", "ClickHouse", "Fast open-source OLAP database management system for real-time analytics", "39k", "C++", &["olap", "analytics"]),
            repo("duckdb", "duckdb", "In-process SQL OLAP database management system", "27k", "C++", &["olap", "embedded"]),
            repo("questdb", "questdb", "High-performance time-series database for real-time analytics", "15k", "Java", &["time-series", "analytics"]),
            repo("timescale", "timescaledb", "Open-source time-series SQL database optimized for fast ingest", "18k", "C", &["time-series", "postgres"]),
            repo("vitessio", "vitess", "Database clustering system for horizontal scaling of MySQL", "19k", "Go", &["mysql", "sharding"]),
            repo("weaviate", "weaviate", "Open-source vector database for AI-native applications", "12k", "Go", &["vector", "ai"]),
            repo("qdrant", "qdrant", "High-performance vector search engine for next-gen AI", "22k", "Rust", &["vector", "search"]),
            repo("milvus-io", "milvus", "Cloud-native vector database for scalable similarity search", "32k", "Go", &["vector", "ai"]),
            repo("dragonflydb", "dragonfly", "Modern in-memory datastore, compatible with Redis and Memcached APIs", "27k", "C++", &["cache", "redis-compatible"]),
            repo("valkey-io", "valkey", "High-performance data structure server forked from Redis", "18k", "C", &["cache", "kv"]),
            repo("YugaByte", "yugabyte-db", "Cloud native distributed SQL database for mission-critical apps", "9k", "C", &["distributed", "sql"]),
            repo("scylladb", "scylladb", "NoSQL data store, Cassandra-compatible at 10x the throughput", "14k", "C++", &["nosql", "distributed"]),
            repo("minio", "minio", "High-performance object storage for AI and cloud-native", "50k", "Go", &["object-storage", "s3"]),
            repo("seaweedfs", "seaweedfs", "Fast distributed storage system for billions of files", "23k", "Go", &["storage", "distributed"]),
        ],
    },
    Category {
        id: "devtools",
        label: "Dev Tools",
        icon: "=>",
        repos: &[
            repo("vitejs", "vite", "Next generation frontend tooling", "71k", "TypeScript", &["bundler", "hmr"]),
            repo("biomejs", "biome", "A toolchain for web projects — formatter, linter, and more", "16k", "Rust", &["linter", "formatter"]),
            repo("oxc-project", "oxc", "The JavaScript Oxidation Compiler", "13k", "Rust", &["parser", "linter"]),
            repo("evanw", "esbuild", "An extremely fast bundler for the web", "38k", "Go", &["bundler", "fast"]),
            repo("rolldown", "rolldown", "Fast Rust bundler for JavaScript with Rollup-compatible API", "10k", "Rust", &["bundler", "fast"]),
            repo("oven-sh", "bun", "Incredibly fast JavaScript runtime, bundler, test runner, and package manager", "75k", "Zig", &["runtime", "fast"]),
            repo("denoland", "deno", "A modern runtime for JavaScript and TypeScript", "101k", "Rust", &["runtime", "typescript"]),
            repo("gradle", "gradle", "Adaptable, fast automation for all", "17k", "Groovy", &["build-tool", "java"]),
            repo("docker", "awesome-compose", "Awesome Docker Compose samples", "37k", "Markdown", &["docker", "examples"]),
            repo("SonarSource", "SonarQube", "Continuous inspection for code quality and security", "9k", "Java", &["code-quality", "analysis"]),
            repo("backstage", "backstage", "Open platform for building developer portals, created by Spotify", "29k", "TypeScript", &["developer-portal", "platform"]),
            repo("infisical", "infisical", "Open-source secrets management platform", "16k", "TypeScript", &["secrets", "security"]),
            repo("npm", "cli", "The package manager for JavaScript", "9k", "JavaScript", &["package-manager", "node"]),
        ],
    },
    Category {
        id: "ai-ml",
        label: "AI & ML",
        icon: "**",
        repos: &[
            repo("huggingface", "transformers", "State-of-the-art Machine Learning for PyTorch, TensorFlow, and JAX", "140k", "Python", &["nlp", "models"]),
            repo("langchain-ai", "langchain", "Build context-aware reasoning applications", "100k", "Python", &["llm", "agents"]),
            repo("ollama", "ollama", "Get up and running with large language models", "110k", "Go", &["llm", "local"]),
            repo("ggerganov", "llama.cpp", "LLM inference in C/C++", "75k", "C++", &["llm", "inference"]),
            repo("open-webui", "open-webui", "User-friendly AI interface", "60k", "Svelte", &["llm", "ui"]),
            repo("mlc-ai", "mlc-llm", "Universal LLM Deployment Engine", "20k", "Python", &["llm", "deployment"]),
            repo("josephmisiti", "awesome-machine-learning", "A curated list of awesome Machine Learning frameworks and libraries", "67k", "Python", &["reference", "curated"]),
            repo("pytorch", "pytorch", "Tensors and Dynamic neural networks with strong GPU acceleration", "86k", "Python", &["deep-learning", "gpu"]),
            repo("tensorflow", "tensorflow", "An open source machine learning framework for everyone", "187k", "C++", &["deep-learning", "production"]),
            repo("langfuse", "langfuse", "Open-source LLM engineering platform for observability and analytics", "8k", "TypeScript", &["llm", "observability"]),
            repo("mindsdb", "mindsdb", "Platform for building AI from enterprise data", "27k", "Python", &["ml", "data"]),
            repo("BerriAI", "litellm", "Call 100+ LLM APIs in the OpenAI format", "15k", "Python", &["llm", "api-gateway"]),
            repo("f", "awesome-chatgpt-prompts", "Curated ChatGPT prompts for better results", "146k", "Markdown", &["llm", "reference"]),
        ],
    },
    Category {
        id: "devops",
        label: "DevOps & Infra",
        icon: "$$",
        repos: &[
            repo("docker", "compose", "Define and run multi-container applications with Docker", "34k", "Go", &["containers", "orchestration"]),
            repo("kubernetes", "kubernetes", "Production-Grade Container Orchestration", "113k", "Go", &["containers", "orchestration"]),
            repo("traefik", "traefik", "The Cloud Native Application Proxy", "53k", "Go", &["proxy", "edge"]),
            repo("caddyserver", "caddy", "Fast and extensible multi-platform HTTP/1-2-3 web server with automatic HTTPS", "61k", "Go", &["server", "https"]),
            repo("grafana", "grafana", "The open and composable observability and data visualization platform", "66k", "TypeScript", &["monitoring", "dashboards"]),
            repo("prometheus", "prometheus", "The Prometheus monitoring system and time series database", "57k", "Go", &["monitoring", "metrics"]),
            repo("hashicorp", "terraform", "Terraform enables you to safely manage infrastructure as code", "43k", "Go", &["iac", "cloud"]),
            repo("ansible", "ansible", "Radically simple IT automation", "64k", "Python", &["automation", "config"]),
            repo("argoproj", "argo-cd", "Declarative continuous deployment for Kubernetes", "18k", "Go", &["gitops", "kubernetes"]),
            repo("helm", "helm", "The Kubernetes Package Manager", "27k", "Go", &["kubernetes", "packages"]),
            repo("hashicorp", "vault", "Tool for secrets management and data protection", "32k", "Go", &["secrets", "security"]),
            repo("hashicorp", "consul", "Service networking solution to connect and secure services", "29k", "Go", &["service-mesh", "networking"]),
            repo("cilium", "cilium", "eBPF-based networking, observability, and security for cloud native", "21k", "Go", &["ebpf", "networking"]),
            repo("linkerd", "linkerd2", "Ultralight service mesh for Kubernetes", "11k", "Go", &["service-mesh", "kubernetes"]),
            repo("dapr", "dapr", "Portable, event-driven runtime for building distributed applications", "24k", "Go", &["distributed", "runtime"]),
            repo("open-policy-agent", "opa", "Open Policy Agent for unified policy enforcement", "10k", "Go", &["policy", "security"]),
            repo("cert-manager", "cert-manager", "Automatically provision and manage TLS certificates in Kubernetes", "13k", "Go", &["kubernetes", "tls"]),
        ],
    },
    Category {
        id: "observability",
        label: "Observability",
        icon: "~~",
        repos: &[
            repo("getsentry", "sentry", "Developer-first error tracking and performance monitoring", "40k", "Python", &["error-tracking", "apm"]),
            repo("signoz", "signoz", "Open-source APM, alternative to DataDog and New Relic", "20k", "TypeScript", &["apm", "tracing"]),
            repo("jaegertracing", "jaeger", "Distributed tracing platform for monitoring microservices", "21k", "Go", &["tracing", "distributed"]),
            repo("open-telemetry", "opentelemetry-collector", "Vendor-agnostic telemetry data receiver, processor and exporter", "5k", "Go", &["telemetry", "collector"]),
            repo("vectordotdev", "vector", "High-performance observability data pipeline for logs and metrics", "18k", "Rust", &["pipeline", "logs"]),
            repo("victoriametrics", "VictoriaMetrics", "Fast, cost-effective monitoring solution and time series database", "13k", "Go", &["metrics", "prometheus"]),
            repo("uptrace", "uptrace", "Open-source APM with distributed tracing and metrics", "4k", "Go", &["apm", "tracing"]),
        ],
    },
    Category {
        id: "rust",
        label: "Rust",
        icon: "Rs",
        repos: &[
            repo("rust-lang", "rust", "Empowering everyone to build reliable and efficient software", "101k", "Rust", &["compiler", "systems"]),
            repo("tokio-rs", "tokio", "A runtime for writing reliable asynchronous applications", "28k", "Rust", &["async", "runtime"]),
            repo("serde-rs", "serde", "Serialization framework for Rust", "9k", "Rust", &["serialization"]),
            repo("BurntSushi", "ripgrep", "A line-oriented search tool that recursively searches", "50k", "Rust", &["cli", "search"]),
            repo("sharkdp", "bat", "A cat clone with syntax highlighting and Git integration", "51k", "Rust", &["cli", "tool"]),
            repo("starship", "starship", "The minimal, blazing-fast, and customizable prompt for any shell", "47k", "Rust", &["cli", "prompt"]),
            repo("astral-sh", "ruff", "An extremely fast Python linter and code formatter, written in Rust", "36k", "Rust", &["python", "linter"]),
            repo("astral-sh", "uv", "An extremely fast Python package and project manager, written in Rust", "35k", "Rust", &["python", "package-manager"]),
            repo("rust-embedded", "awesome-embedded-rust", "Curated list of resources for embedded Rust development", "6k", "Rust", &["embedded", "curated"]),
            repo("TaKO8Ki", "awesome-alternatives-in-rust", "Curated list of CLI replacements written in Rust", "4k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "editors",
        label: "Editors",
        icon: "vi",
        repos: &[
            repo("neovim", "neovim", "Vim-fork focused on extensibility and usability", "86k", "Vim Script", &["terminal", "extensible"]),
            repo("helix-editor", "helix", "A post-modern modal text editor", "35k", "Rust", &["terminal", "modal"]),
            repo("zed-industries", "zed", "Code at the speed of thought", "55k", "Rust", &["gui", "fast"]),
            repo("lapce", "lapce", "Lightning-fast and powerful code editor written in Rust", "35k", "Rust", &["gui", "fast"]),
            repo("obsidianmd", "obsidian-releases", "Community plugins list for Obsidian", "12k", "Markdown", &["notes", "plugins"]),
            repo("JetBrains", "intellij-community", "IntelliJ IDEA Community Edition & IntelliJ Platform", "17k", "Java", &["ide", "java"]),
            repo("viatsko", "awesome-vscode", "Curated list of delightful VS Code packages and resources", "28k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "gaming",
        label: "Game Dev",
        icon: "gx",
        repos: &[
            repo("godotengine", "godot", "Multi-platform 2D and 3D game engine", "95k", "C++", &["engine", "2d", "3d"]),
            repo("bevyengine", "bevy", "A refreshingly simple data-driven game engine built in Rust", "38k", "Rust", &["engine", "ecs"]),
            repo("mrdoob", "three.js", "JavaScript 3D Library", "104k", "JavaScript", &["webgl", "3d"]),
            repo("photonstorm", "phaser", "Phaser is a fun, free and fast 2D game framework for making HTML5 games", "37k", "JavaScript", &["2d", "browser"]),
            repo("libgdx", "libgdx", "Desktop/Android/HTML5/iOS Java game development framework", "24k", "Java", &["engine", "cross-platform"]),
            repo("dawdle-deer", "awesome-learn-gamedev", "Curated collection of game development learning resources", "4k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "security",
        label: "Security",
        icon: "!!",
        repos: &[
            repo("OWASP", "CheatSheetSeries", "Cheatsheets for application security", "28k", "Markdown", &["reference", "web"]),
            repo("gitleaks", "gitleaks", "Protect and discover secrets using Gitleaks", "18k", "Go", &["secrets", "scanner"]),
            repo("trufflesecurity", "trufflehog", "Find, verify, and analyze leaked credentials", "17k", "Go", &["secrets", "scanner"]),
            repo("aquasecurity", "trivy", "Find vulnerabilities, misconfigurations, secrets in containers and code", "24k", "Go", &["scanner", "containers"]),
            repo("sbilly", "awesome-security", "A collection of awesome software, libraries, and tools for security", "13k", "Markdown", &["reference", "curated"]),
            repo("qazbnm456", "awesome-web-security", "A curated list of web security materials and resources", "11k", "Markdown", &["reference", "web"]),
            repo("zeek", "zeek", "A powerful network analysis framework for security monitoring", "7k", "C++", &["network", "monitoring"]),
            repo("snyk", "cli", "Find and fix known vulnerabilities in dependencies", "5k", "TypeScript", &["vulnerabilities", "sca"]),
            repo("anchore", "grype", "Vulnerability scanner for container images and filesystems", "9k", "Go", &["scanner", "sbom"]),
            repo("anchore", "syft", "CLI tool for generating Software Bill of Materials (SBOM)", "6k", "Go", &["sbom", "supply-chain"]),
            repo("sigstore", "cosign", "Container signing and verification tool", "5k", "Go", &["signing", "supply-chain"]),
        ],
    },
    Category {
        id: "testing",
        label: "Testing",
        icon: "??",
        repos: &[
            repo("vitest-dev", "vitest", "Next generation testing framework powered by Vite", "14k", "TypeScript", &["unit", "vite"]),
            repo("microsoft", "playwright", "Playwright is a framework for Web Testing and Automation", "70k", "TypeScript", &["e2e", "browser"]),
            repo("cypress-io", "cypress", "Fast, easy and reliable testing for anything that runs in a browser", "48k", "JavaScript", &["e2e", "browser"]),
            repo("stretchr", "testify", "A toolkit with common assertions and mocks for Go", "24k", "Go", &["go", "assertions"]),
            repo("pytest-dev", "pytest", "The pytest framework makes it easy to write small tests", "12k", "Python", &["python", "unit"]),
            repo("grafana", "k6", "Modern load testing tool using Go and JavaScript", "26k", "Go", &["load-testing", "performance"]),
            repo("SeleniumHQ", "selenium", "Browser automation framework and ecosystem", "31k", "Java", &["e2e", "browser"]),
        ],
    },
    Category {
        id: "learning",
        label: "Learning",
        icon: "ab",
        repos: &[
            repo("freeCodeCamp", "freeCodeCamp", "Open source codebase and curriculum for learning to code", "410k", "TypeScript", &["education", "curriculum"]),
            repo("codecrafters-io", "build-your-own-x", "Master programming by recreating your favorite technologies from scratch", "467k", "Markdown", &["education", "projects"]),
            repo("ossu", "computer-science", "Path to a free self-taught education in Computer Science", "201k", "Markdown", &["education", "curriculum"]),
            repo("MunGell", "awesome-for-beginners", "A list of awesome beginners-friendly projects", "83k", "Markdown", &["beginner", "curated"]),
            repo("prakhar1989", "awesome-courses", "List of awesome university courses for learning Computer Science", "67k", "Markdown", &["education", "courses"]),
            repo("Chalarangelo", "30-seconds-of-code", "Coding articles to level up your development skills", "127k", "JavaScript", &["snippets", "reference"]),
            repo("iluwatar", "java-design-patterns", "Design patterns implemented in Java", "94k", "Java", &["patterns", "java"]),
            repo("tayllan", "awesome-algorithms", "A curated list of awesome places to learn algorithms", "20k", "Markdown", &["algorithms", "curated"]),
            repo("trimstray", "the-book-of-secret-knowledge", "A collection of inspiring lists, manuals, cheatsheets, and hacks", "207k", "Markdown", &["reference", "sysadmin"]),
            repo("DopplerHQ", "awesome-interview-questions", "A curated list of lists of interview questions", "81k", "Markdown", &["interviews", "reference"]),
            repo("ripienaar", "free-for-dev", "A list of SaaS, PaaS and IaaS offerings that have free tiers", "118k", "Markdown", &["free-tier", "reference"]),
            repo("binhnguyennus", "awesome-scalability", "The Patterns of Scalable, Reliable, and Performant Large-Scale Systems", "69k", "Markdown", &["architecture", "reference"]),
            repo("DovAmir", "awesome-design-patterns", "Software and architecture related design patterns", "46k", "Markdown", &["patterns", "architecture"]),
            repo("dypsilon", "frontend-dev-bookmarks", "Manually curated collection of resources for frontend web developers", "46k", "Markdown", &["frontend", "reference"]),
            repo("cloudcommunity", "Free-Certifications", "A curated list of free courses with certifications", "51k", "Markdown", &["certifications", "free"]),
            repo("PanXProject", "awesome-certificates", "Curated list of 20k+ hours of free courses with certificates", "5k", "Markdown", &["certifications", "free"]),
            repo("codecombat", "codecombat", "Game for learning how to code", "8k", "JavaScript", &["education", "game"]),
            repo("openedx", "edx-platform", "The Open edX LMS & Studio, powering education sites worldwide", "7k", "Python", &["education", "lms"]),
        ],
    },
    Category {
        id: "mobile",
        label: "Mobile",
        icon: "##",
        repos: &[
            repo("facebook", "react-native", "A framework for building native applications using React", "121k", "C++", &["react", "cross-platform"]),
            repo("flutter", "flutter", "Flutter makes it easy to build beautiful apps for mobile, web, and desktop", "168k", "Dart", &["cross-platform", "ui"]),
            repo("expo", "expo", "An open-source framework for making universal native apps", "36k", "TypeScript", &["react-native", "tooling"]),
            repo("nicklockwood", "SwiftFormat", "A command-line tool and Xcode extension for formatting Swift code", "8k", "Swift", &["ios", "formatter"]),
            repo("nicklockwood", "iCarousel", "A simple, highly customisable, data-driven 3D carousel for iOS", "12k", "Objective-C", &["ios", "ui"]),
            repo("jondot", "awesome-react-native", "Awesome React Native components, news, tools, and learning material", "36k", "Markdown", &["reference", "curated"]),
            repo("Solido", "awesome-flutter", "An awesome list of the best Flutter libraries, tools, and tutorials", "59k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "cli",
        label: "CLI Tools",
        icon: "$>",
        repos: &[
            repo("junegunn", "fzf", "A command-line fuzzy finder", "68k", "Go", &["fuzzy", "search"]),
            repo("jesseduffield", "lazygit", "Simple terminal UI for git commands", "55k", "Go", &["git", "tui"]),
            repo("sharkdp", "fd", "A simple, fast and user-friendly alternative to find", "35k", "Rust", &["search", "fast"]),
            repo("ajeetdsouza", "zoxide", "A smarter cd command inspired by z and autojump", "24k", "Rust", &["navigation", "shell"]),
            repo("charmbracelet", "bubbletea", "A powerful little TUI framework", "29k", "Go", &["tui", "framework"]),
            repo("tmux", "tmux", "Terminal multiplexer", "36k", "C", &["terminal", "multiplexer"]),
            repo("eza-community", "eza", "A modern alternative to ls (maintained fork of exa)", "14k", "Rust", &["ls", "modern"]),
            repo("jqlang", "jq", "Command-line JSON processor", "31k", "C", &["json", "parser"]),
            repo("alebcay", "awesome-shell", "Curated list of awesome command-line frameworks and toolkits", "36k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "self-hosted",
        label: "Self-Hosted",
        icon: "@@",
        repos: &[
            repo("awesome-selfhosted", "awesome-selfhosted", "A list of free software network services and web applications to self-host", "274k", "Markdown", &["reference", "curated"]),
            repo("immich-app", "immich", "High performance self-hosted photo and video management solution", "58k", "TypeScript", &["photos", "media"]),
            repo("nextcloud", "server", "Nextcloud server, a safe home for all your data", "28k", "PHP", &["cloud", "storage"]),
            repo("gethomepage", "homepage", "A highly customizable homepage with service API integrations", "22k", "JavaScript", &["dashboard", "monitoring"]),
            repo("louislam", "uptime-kuma", "A fancy self-hosted monitoring tool", "63k", "JavaScript", &["monitoring", "uptime"]),
            repo("odoo", "odoo", "Open Source Apps To Grow Your Business — ERP & CRM", "40k", "Python", &["erp", "business"]),
            repo("calcom", "cal.com", "Open source scheduling infrastructure, Calendly alternative", "34k", "TypeScript", &["scheduling", "calendar"]),
            repo("NocoDB", "nocodb", "Open-source Airtable alternative for no-code databases", "51k", "TypeScript", &["no-code", "airtable"]),
            repo("makeplane", "plane", "Open-source project management, Jira and Linear alternative", "32k", "TypeScript", &["project-management", "kanban"]),
            repo("twentyhq", "twenty", "Open-source CRM, modern alternative to Salesforce", "25k", "TypeScript", &["crm", "sales"]),
            repo("RocketChat", "Rocket.Chat", "Open-source team communication platform, Slack alternative", "41k", "TypeScript", &["chat", "messaging"]),
            repo("chatwoot", "chatwoot", "Open-source customer engagement platform, Intercom alternative", "21k", "Ruby", &["support", "helpdesk"]),
            repo("appwrite", "appwrite", "Secure backend server for web and mobile developers", "47k", "TypeScript", &["baas", "backend"]),
            repo("mattermost", "mattermost", "Open source platform for secure collaboration", "31k", "TypeScript", &["chat", "collaboration"]),
            repo("plausible", "analytics", "Simple, privacy-friendly alternative to Google Analytics", "21k", "Elixir", &["analytics", "privacy"]),
            repo("posthog", "posthog", "Open-source product analytics, alternative to Mixpanel", "24k", "Python", &["analytics", "product"]),
            repo("serhii-londar", "open-source-mac-os-apps", "Awesome list of open source applications for macOS", "47k", "Markdown", &["macos", "curated"]),
        ],
    },
    Category {
        id: "automation",
        label: "Automation & Workflow",
        icon: ">>",
        repos: &[
            repo("n8n-io", "n8n", "Free and source-available workflow automation tool, Zapier alternative", "52k", "TypeScript", &["workflow", "low-code"]),
            repo("activepieces", "activepieces", "Open-source no-code workflow automation, Zapier alternative", "11k", "TypeScript", &["automation", "no-code"]),
            repo("temporalio", "temporal", "Durable execution platform for microservice orchestration", "13k", "Go", &["orchestration", "microservices"]),
            repo("windmill-labs", "windmill", "Turn scripts into webhooks, workflows and UIs", "11k", "Rust", &["scripts", "platform"]),
            repo("PrefectHQ", "prefect", "Modern workflow orchestration for data pipelines", "17k", "Python", &["data", "orchestration"]),
            repo("ToolJet", "ToolJet", "Open-source low-code platform for internal tools, Retool alternative", "34k", "TypeScript", &["low-code", "internal-tools"]),
            repo("Budibase", "budibase", "Open-source low-code platform for building internal apps", "23k", "TypeScript", &["low-code", "internal-tools"]),
            repo("formbricks", "formbricks", "Open-source experience management, privacy-first surveys", "9k", "TypeScript", &["surveys", "feedback"]),
            repo("flagsmith", "flagsmith", "Open-source feature flag and remote config service", "5k", "Python", &["feature-flags", "config"]),
        ],
    },
    Category {
        id: "data-engineering",
        label: "Data Engineering",
        icon: "||",
        repos: &[
            repo("pandas-dev", "pandas", "Flexible and powerful data analysis and manipulation library for Python", "44k", "Python", &["dataframes", "analysis"]),
            repo("apache", "spark", "Unified analytics engine for large-scale data processing", "40k", "Scala", &["big-data", "distributed"]),
            repo("apache", "superset", "Apache Superset is a data visualization and exploration platform", "64k", "TypeScript", &["visualization", "dashboards"]),
            repo("apache", "airflow", "Platform to programmatically author, schedule and monitor workflows", "38k", "Python", &["workflow", "orchestration"]),
            repo("plotly", "plotly.js", "Open-source JavaScript charting library", "18k", "JavaScript", &["charts", "visualization"]),
            repo("jupyter", "notebook", "Jupyter Interactive Notebook", "12k", "Python", &["notebook", "interactive"]),
            repo("metabase", "metabase", "Easy-to-use open source BI and analytics tool", "40k", "Clojure", &["bi", "analytics"]),
            repo("dbt-labs", "dbt-core", "Transform data in your warehouse using SQL and software engineering practices", "10k", "Python", &["sql", "transformation"]),
            repo("airbytehq", "airbyte", "Open-source data integration platform for ELT pipelines", "16k", "Python", &["etl", "integration"]),
            repo("dagster-io", "dagster", "Orchestration platform for data assets", "12k", "Python", &["orchestration", "data"]),
            repo("meltano", "meltano", "Open-source platform for the whole data lifecycle", "2k", "Python", &["etl", "singer"]),
            repo("redpanda-data", "redpanda", "Streaming data platform, Kafka API compatible at 10x performance", "10k", "C++", &["streaming", "kafka"]),
            repo("trinodb", "trino", "Fast distributed SQL query engine for big data analytics", "10k", "Java", &["sql", "big-data"]),
            repo("StarRocks", "starrocks", "Next-gen sub-second MPP OLAP database", "9k", "C++", &["olap", "analytics"]),
            repo("cube-js", "cube", "Headless BI platform for building data applications", "18k", "TypeScript", &["analytics", "semantic-layer"]),
        ],
    },
    Category {
        id: "communication",
        label: "Communication",
        icon: "<>",
        repos: &[
            repo("novuhq", "novu", "Open-source notification infrastructure for developers", "35k", "TypeScript", &["notifications", "email"]),
            repo("mattermost", "focalboard", "Open-source alternative to Trello, Notion, and Asana", "22k", "TypeScript", &["kanban", "project-management"]),
            repo("irccloud", "ios", "IRCCloud iOS App", "3k", "Objective-C", &["irc", "chat"]),
            repo("unsplash", "unsplash-js", "Official JavaScript wrapper for the Unsplash API", "2k", "TypeScript", &["photos", "api"]),
        ],
    },
    Category {
        id: "design",
        label: "Design Systems",
        icon: "()",
        repos: &[
            repo("storybookjs", "storybook", "The UI component explorer for frontend developers", "85k", "TypeScript", &["components", "documentation"]),
            repo("penpot", "penpot", "The open source design and prototyping platform", "35k", "Clojure", &["design", "prototyping"]),
            repo("FortAwesome", "Font-Awesome", "The iconic SVG, font, and CSS toolkit", "74k", "JavaScript", &["icons", "svg"]),
            repo("lucide-icons", "lucide", "Beautiful & consistent icon toolkit made by the community", "13k", "TypeScript", &["icons", "svg"]),
            repo("goabstract", "Awesome-Design-Tools", "The best design tools and plugins for everything", "34k", "Markdown", &["reference", "curated"]),
            repo("alexpate", "awesome-design-systems", "A collection of awesome design systems", "18k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "languages",
        label: "Languages & Runtimes",
        icon: "{}",
        repos: &[
            repo("JetBrains", "kotlin", "The Kotlin Programming Language", "50k", "Kotlin", &["jvm", "language"]),
            repo("arduino", "Arduino", "Arduino IDE for learning electronics and programming", "14k", "Java", &["embedded", "ide"]),
            repo("avelino", "awesome-go", "A curated list of awesome Go frameworks, libraries and software", "165k", "Go", &["reference", "curated"]),
            repo("vinta", "awesome-python", "An opinionated list of awesome Python frameworks, libraries and resources", "230k", "Python", &["reference", "curated"]),
            repo("enaqx", "awesome-react", "A collection of awesome things regarding the React ecosystem", "72k", "Markdown", &["reference", "curated"]),
            repo("sindresorhus", "awesome-nodejs", "Delightful Node.js packages and resources", "65k", "Markdown", &["reference", "curated"]),
            repo("fffaraz", "awesome-cpp", "A curated list of awesome C++ frameworks, libraries and resources", "70k", "Markdown", &["reference", "curated"]),
            repo("akullpp", "awesome-java", "A curated list of awesome Java frameworks and software", "47k", "Markdown", &["reference", "curated"]),
        ],
    },
    Category {
        id: "curated-lists",
        label: "Curated Lists",
        icon: "[]",
        repos: &[
            repo("sindresorhus", "awesome", "Awesome lists about all kinds of interesting topics", "439k", "Markdown", &["meta", "reference"]),
            repo("jaywcjlove", "awesome-mac", "Collect premium software in various categories for macOS", "99k", "Markdown", &["macos", "software"]),
            repo("tiimgreen", "github-cheat-sheet", "Cool features of Git and GitHub you might not know", "55k", "Markdown", &["git", "reference"]),
            repo("veggiemonk", "awesome-docker", "A curated list of Docker resources and projects", "35k", "Markdown", &["docker", "reference"]),
            repo("kuchin", "awesome-cto", "Resources for Chief Technology Officers, with emphasis on startups", "34k", "Markdown", &["leadership", "reference"]),
            repo("awesome-foss", "awesome-sysadmin", "Curated list of amazingly awesome open-source sysadmin resources", "33k", "Markdown", &["sysadmin", "reference"]),
            repo("herrbischoff", "awesome-macos-command-line", "Use your macOS terminal shell to do awesome things", "30k", "Markdown", &["macos", "cli"]),
            repo("academic", "awesome-datascience", "An awesome Data Science repository to learn and apply", "28k", "Markdown", &["data-science", "reference"]),
            repo("lukasz-madon", "awesome-remote-job", "A curated list of awesome remote jobs and resources", "44k", "Markdown", &["remote", "career"]),
            repo("PatrickJS", "awesome-cursorrules", "Configuration files that enhance Cursor AI editor experience", "38k", "Markdown", &["ai", "editor"]),
            repo("wong2", "awesome-mcp-servers", "A curated list of Model Context Protocol servers", "15k", "Markdown", &["mcp", "ai"]),
        ],
    },
];

// src/catalog.rs
//
// Fixed Portuguese text catalogs and the name-generation facility.
//
// Everything here is static data; the generators pick entries through the
// shared SamplerRng, which keeps name and text generation fully
// deterministic for a given seed.

use crate::rng::SamplerRng;

// ----- Personal / project names ---------------------------------------------

const FIRST_NAMES: &[&str] = &[
    "Ana", "Beatriz", "Bruno", "Camila", "Carlos", "Cláudia", "Daniel", "Eduardo", "Fernanda",
    "Gabriel", "Gustavo", "Helena", "Isabela", "João", "Juliana", "Larissa", "Leonardo",
    "Luciana", "Marcelo", "Mariana", "Patrícia", "Paulo", "Rafael", "Renata", "Ricardo",
    "Rodrigo", "Sofia", "Thiago", "Vanessa", "Vinícius",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Araújo", "Barbosa", "Cardoso", "Carvalho", "Castro", "Costa", "Dias",
    "Fernandes", "Ferreira", "Gomes", "Lima", "Martins", "Melo", "Mendes", "Monteiro",
    "Moreira", "Nascimento", "Oliveira", "Pereira", "Ribeiro", "Rocha", "Rodrigues", "Santos",
    "Silva", "Souza", "Teixeira", "Vieira",
];

const PROJECT_KINDS: &[&str] = &[
    "Sistema",
    "Plataforma",
    "Portal",
    "Aplicativo",
    "Módulo",
    "Programa de Modernização",
];

const PROJECT_DOMAINS: &[&str] = &[
    "de Gestão Financeira",
    "de Logística Integrada",
    "de Atendimento ao Cliente",
    "de Recursos Humanos",
    "de Análise de Dados",
    "de Faturamento Eletrônico",
    "de Controle de Estoque",
    "de Vendas Digitais",
    "de Monitoramento Operacional",
    "de Gestão de Contratos",
];

/// Full Brazilian-Portuguese personal name (first + last).
pub fn full_name(rng: &mut SamplerRng) -> String {
    format!("{} {}", rng.choose(FIRST_NAMES), rng.choose(LAST_NAMES))
}

/// Human-readable project name, e.g. "Plataforma de Logística Integrada".
pub fn project_name(rng: &mut SamplerRng) -> String {
    format!("{} {}", rng.choose(PROJECT_KINDS), rng.choose(PROJECT_DOMAINS))
}

// ----- Schedule -------------------------------------------------------------

pub const DELAY_REASONS: &[&str] = &[
    "Atraso na entrega de fornecedores",
    "Indisponibilidade de equipe especializada",
    "Mudanças de requisitos em fase avançada",
    "Problemas técnicos de integração",
    "Dependência de aprovações externas",
    "Subestimativa do esforço de desenvolvimento",
    "Rotatividade na equipe do projeto",
    "Restrições orçamentárias temporárias",
];

pub const TASK_DESCRIPTIONS: &[&str] = &[
    "Levantamento de requisitos com áreas de negócio",
    "Modelagem da arquitetura da solução",
    "Desenvolvimento do módulo de autenticação",
    "Integração com sistemas legados",
    "Migração da base de dados",
    "Execução de testes integrados",
    "Homologação com usuários-chave",
    "Preparação do ambiente de produção",
    "Treinamento das equipes de operação",
    "Elaboração da documentação técnica",
    "Implantação em produção assistida",
    "Auditoria de segurança da aplicação",
];

// ----- Scope ----------------------------------------------------------------

pub const CHANGE_DESCRIPTIONS: &[&str] = &[
    "Adição de novos requisitos de segurança",
    "Expansão do escopo para incluir funcionalidades adicionais",
    "Redução do escopo devido a restrições orçamentárias",
    "Alteração nas especificações técnicas",
    "Mudança na plataforma de implementação",
];

pub const CHANGE_REQUESTS: &[&str] = &[
    "Adição de funcionalidade de autenticação biométrica",
    "Alteração na interface do usuário",
    "Integração com sistema legado",
    "Mudança no banco de dados",
    "Adição de relatórios gerenciais",
    "Implementação de módulo de exportação de dados",
    "Alteração nos requisitos de desempenho",
    "Mudança na arquitetura do sistema",
];

pub const REQUIREMENTS: &[&str] = &[
    "O sistema deve permitir autenticação de usuários",
    "O sistema deve processar transações em menos de 2 segundos",
    "O sistema deve ser compatível com navegadores modernos",
    "O sistema deve permitir exportação de dados em formato CSV",
    "O sistema deve implementar criptografia de dados sensíveis",
    "O sistema deve ter interface responsiva",
    "O sistema deve permitir integração com APIs externas",
    "O sistema deve ter backup automático diário",
    "O sistema deve ter controle de acesso baseado em perfis",
    "O sistema deve registrar logs de auditoria",
    "O sistema deve ter alta disponibilidade (99.9%)",
    "O sistema deve ser escalável para suportar até 10.000 usuários simultâneos",
    "O sistema deve ter documentação completa",
    "O sistema deve passar por testes de segurança",
    "O sistema deve ser compatível com dispositivos móveis",
];

// ----- Risk -----------------------------------------------------------------

pub const RISK_DESCRIPTIONS: &[&str] = &[
    "Atraso na entrega de componentes críticos",
    "Rotatividade de pessoal-chave",
    "Mudanças regulatórias",
    "Problemas de integração com sistemas legados",
    "Falhas de segurança",
    "Indisponibilidade de recursos especializados",
    "Problemas de desempenho",
    "Falhas em testes de aceitação",
    "Resistência dos usuários à mudança",
    "Problemas de compatibilidade",
    "Falhas de infraestrutura",
    "Dependências externas não cumpridas",
    "Estimativas imprecisas",
    "Requisitos mal definidos",
    "Problemas de comunicação com stakeholders",
];

pub const MITIGATION_PLANS: &[&str] = &[
    "Implementar plano de contingência",
    "Contratar pessoal adicional",
    "Monitorar mudanças regulatórias",
    "Realizar testes de integração antecipados",
    "Fortalecer medidas de segurança",
    "Buscar fornecedores alternativos",
    "Otimizar código e infraestrutura",
    "Realizar testes de aceitação com usuários-chave",
    "Comunicar benefícios da mudança",
    "Testar compatibilidade em diferentes ambientes",
    "Implementar redundância de infraestrutura",
    "Gerenciar dependências ativamente",
    "Refinar estimativas com base em dados históricos",
    "Melhorar a documentação de requisitos",
    "Estabelecer canais de comunicação claros",
];

/// Realized-impact / action-taken text pairs for occurred risks.
pub const OCCURRED_RISK_OUTCOMES: &[(&str, &str)] = &[
    (
        "Atraso de duas semanas na entrega do módulo principal",
        "Replanejamento do cronograma e realocação de equipe",
    ),
    (
        "Aumento de custos com contratação emergencial",
        "Revisão do orçamento e aprovação de verba adicional",
    ),
    (
        "Indisponibilidade do ambiente de homologação por três dias",
        "Acionamento do plano de contingência de infraestrutura",
    ),
    (
        "Retrabalho no módulo de integração com sistema legado",
        "Reforço da equipe técnica e revisão da especificação",
    ),
    (
        "Perda de um analista-chave no meio da implementação",
        "Transferência de conhecimento acelerada e contratação de substituto",
    ),
    (
        "Falha de desempenho identificada em teste de carga",
        "Otimização de consultas e ajuste da infraestrutura",
    ),
    (
        "Não conformidade apontada em auditoria interna",
        "Plano de ação corretiva com acompanhamento semanal",
    ),
];

// ----- Stakeholders / communications ----------------------------------------

pub const STAKEHOLDER_ROLES: &[&str] = &[
    "Patrocinador",
    "Gerente funcional",
    "Usuário-chave",
    "Fornecedor",
    "Analista de negócios",
    "Arquiteto de soluções",
    "Diretor de operações",
    "Representante do cliente",
    "Líder técnico",
    "Auditor interno",
];

pub const COMMUNICATION_TYPES: &[&str] = &[
    "Reunião de status",
    "E-mail",
    "Relatório executivo",
    "Comitê de mudanças",
    "Workshop",
    "Apresentação à diretoria",
];

pub const COMMUNICATION_SUMMARIES: &[&str] = &[
    "Alinhamento sobre o andamento do cronograma",
    "Revisão dos riscos prioritários do projeto",
    "Aprovação de solicitação de mudança de escopo",
    "Discussão sobre desvios de orçamento",
    "Validação de entregas da última sprint",
    "Planejamento da próxima fase do projeto",
    "Comunicação de atraso a partes interessadas",
    "Apresentação de indicadores de qualidade",
];

// ----- Quality / resources / lessons ----------------------------------------

/// (name, unit, target) for quality metrics; the current value is sampled
/// around the target.
pub const QUALITY_METRICS: &[(&str, &str, f64)] = &[
    ("Cobertura de testes", "%", 80.0),
    ("Densidade de defeitos", "defeitos/KLOC", 2.0),
    ("Satisfação do cliente", "pontos (1-10)", 8.0),
    ("Disponibilidade do sistema", "%", 99.5),
    ("Aderência ao cronograma de entregas", "%", 90.0),
    ("Retrabalho", "%", 10.0),
];

pub const RESOURCE_ROLES: &[&str] = &[
    "Desenvolvedor sênior",
    "Desenvolvedor pleno",
    "Analista de testes",
    "Analista de negócios",
    "Arquiteto de software",
    "Designer de interface",
    "Administrador de banco de dados",
    "Especialista em segurança",
    "Engenheiro de dados",
    "Analista de infraestrutura",
];

pub const LESSON_CATEGORIES: &[&str] = &[
    "Planejamento",
    "Comunicação",
    "Gestão de riscos",
    "Gestão de fornecedores",
    "Qualidade",
    "Equipe",
];

pub const LESSONS_LEARNED: &[&str] = &[
    "Envolver usuários-chave desde o início reduz retrabalho",
    "Estimativas devem considerar dados históricos de projetos similares",
    "Reuniões curtas e frequentes melhoram o alinhamento da equipe",
    "Riscos de fornecedores precisam de planos de contingência explícitos",
    "Testes de integração antecipados evitam surpresas na homologação",
    "Documentar decisões de arquitetura facilita a manutenção",
    "Mudanças de escopo exigem análise formal de impacto",
    "Comunicação proativa de atrasos preserva a confiança do patrocinador",
    "Automatizar testes de regressão acelera as entregas",
    "Critérios de aceite claros reduzem conflitos na entrega",
];

// ----- Dependencies ----------------------------------------------------------

pub const DEPENDENCY_DESCRIPTIONS: &[&str] = &[
    "Depende da infraestrutura entregue pelo projeto anterior",
    "Compartilha equipe de especialistas com o projeto predecessor",
    "Consome APIs publicadas pelo projeto predecessor",
    "Aguarda homologação de componente comum",
    "Utiliza base de dados consolidada por outro projeto",
    "Depende de contrato negociado pelo projeto predecessor",
];

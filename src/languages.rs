//! Sample language profiles.
//!
//! Six typologically distinct languages, all localizing the full builtin
//! command set: English and Spanish (SVO, prepositions, spaces), Japanese
//! (SOV, particles, no spaces), Korean (SOV, postpositions fused onto
//! spaced words), Turkish (SOV, case suffixes with vowel harmony), and
//! Chinese (SVO, prepositions, no spaces).
//!
//! These are starting points, not linguistic authorities: hosts are
//! expected to refine surfaces and add hand-authored patterns on top.

use glossa_foundation::{MarkerPosition, RoleMarker, SemanticRole, SemanticValue};
use glossa_profile::{
    BoundaryStrategy, LanguageProfile, MarkingStrategy, StructureSurfaces, WordOrder,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// English: SVO, prepositions, space-delimited.
#[must_use]
pub fn english() -> LanguageProfile {
    LanguageProfile::new(
        "en",
        "English",
        WordOrder::Svo,
        MarkingStrategy::Preposition,
        BoundaryStrategy::Space,
    )
    .with_command("toggle", ["toggle", "switch", "flip"])
    .with_command("add", ["add"])
    .with_command("remove", ["remove"])
    .with_command("set", ["set"])
    .with_command("show", ["show", "reveal"])
    .with_command("hide", ["hide"])
    .with_command("put", ["put", "place"])
    .with_command("send", ["send"])
    .with_command("wait", ["wait"])
    .with_command("log", ["log", "print"])
    .with_command("increment", ["increment", "increase"])
    .with_command("decrement", ["decrement", "decrease"])
    .with_command("fetch", ["fetch", "load"])
    .with_marker(
        SemanticRole::Destination,
        RoleMarker::new("on", MarkerPosition::Before).with_alternatives(["to", "into", "onto"]),
    )
    .with_marker(
        SemanticRole::Content,
        RoleMarker::new("to", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Source,
        RoleMarker::new("from", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Style,
        RoleMarker::new("with", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Quantity,
        RoleMarker::new("by", MarkerPosition::Before),
    )
    .with_default(
        "send",
        SemanticRole::Destination,
        SemanticValue::Reference("me".to_string()),
    )
    .with_structure(StructureSurfaces {
        event_prefix: strings(&["when", "on"]),
        event_position: Some(MarkerPosition::Before),
        connectors: strings(&["then"]),
        conditional: strings(&["if"]),
        conditional_else: strings(&["else", "otherwise"]),
        loop_keyword: strings(&["repeat"]),
        loop_unit: strings(&["times"]),
    })
}

/// Spanish: SVO, prepositions, space-delimited.
#[must_use]
pub fn spanish() -> LanguageProfile {
    LanguageProfile::new(
        "es",
        "Español",
        WordOrder::Svo,
        MarkingStrategy::Preposition,
        BoundaryStrategy::Space,
    )
    .with_command("toggle", ["alternar", "cambiar"])
    .with_command("add", ["añadir", "agregar"])
    .with_command("remove", ["quitar", "eliminar"])
    .with_command("set", ["fijar"])
    .with_command("show", ["mostrar"])
    .with_command("hide", ["ocultar"])
    .with_command("put", ["poner", "colocar"])
    .with_command("send", ["enviar"])
    .with_command("wait", ["esperar"])
    .with_command("log", ["registrar"])
    .with_command("increment", ["incrementar", "aumentar"])
    .with_command("decrement", ["decrementar", "reducir"])
    .with_command("fetch", ["obtener", "cargar"])
    .with_marker(
        SemanticRole::Destination,
        RoleMarker::new("en", MarkerPosition::Before).with_alternatives(["a"]),
    )
    .with_marker(
        SemanticRole::Content,
        RoleMarker::new("a", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Source,
        RoleMarker::new("de", MarkerPosition::Before).with_alternatives(["desde"]),
    )
    .with_marker(
        SemanticRole::Style,
        RoleMarker::new("con", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Quantity,
        RoleMarker::new("por", MarkerPosition::Before),
    )
    .with_structure(StructureSurfaces {
        event_prefix: strings(&["cuando"]),
        event_position: Some(MarkerPosition::Before),
        connectors: strings(&["luego"]),
        conditional: strings(&["si"]),
        conditional_else: strings(&["sino"]),
        loop_keyword: strings(&["repetir"]),
        loop_unit: strings(&["veces"]),
    })
}

/// Japanese: SOV, particles, no word spacing.
#[must_use]
pub fn japanese() -> LanguageProfile {
    LanguageProfile::new(
        "ja",
        "日本語",
        WordOrder::Sov,
        MarkingStrategy::Particle,
        BoundaryStrategy::Particle,
    )
    .with_command("toggle", ["切り替え"])
    .with_command("add", ["追加"])
    .with_command("remove", ["削除"])
    .with_command("set", ["設定"])
    .with_command("show", ["表示"])
    .with_command("hide", ["非表示"])
    .with_command("put", ["配置"])
    .with_command("send", ["送信"])
    .with_command("wait", ["待機"])
    .with_command("log", ["記録"])
    .with_command("increment", ["増加"])
    .with_command("decrement", ["減少"])
    .with_command("fetch", ["取得"])
    .with_marker(
        SemanticRole::Patient,
        RoleMarker::new("を", MarkerPosition::After),
    )
    .with_marker(
        SemanticRole::Content,
        RoleMarker::new("を", MarkerPosition::After),
    )
    .with_marker(
        SemanticRole::Destination,
        RoleMarker::new("に", MarkerPosition::After).with_alternatives(["へ"]),
    )
    .with_marker(
        SemanticRole::Source,
        RoleMarker::new("から", MarkerPosition::After),
    )
    .with_marker(
        SemanticRole::Style,
        RoleMarker::new("で", MarkerPosition::After),
    )
    .with_structure(StructureSurfaces {
        event_prefix: strings(&["時", "とき"]),
        event_position: Some(MarkerPosition::After),
        connectors: strings(&["それから", "そして"]),
        conditional: strings(&["もし"]),
        conditional_else: strings(&["さもなければ"]),
        loop_keyword: strings(&["繰り返し"]),
        loop_unit: strings(&["回"]),
    })
}

/// Korean: SOV, postpositions fused onto space-delimited words.
#[must_use]
pub fn korean() -> LanguageProfile {
    LanguageProfile::new(
        "ko",
        "한국어",
        WordOrder::Sov,
        MarkingStrategy::Postposition,
        BoundaryStrategy::Space,
    )
    .with_attached_markers()
    .with_command("toggle", ["전환"])
    .with_command("add", ["추가"])
    .with_command("remove", ["제거"])
    .with_command("set", ["설정"])
    .with_command("show", ["표시"])
    .with_command("hide", ["숨기기"])
    .with_command("put", ["배치"])
    .with_command("send", ["전송"])
    .with_command("wait", ["대기"])
    .with_command("log", ["기록"])
    .with_command("increment", ["증가"])
    .with_command("decrement", ["감소"])
    .with_command("fetch", ["가져오기"])
    .with_marker(
        SemanticRole::Patient,
        RoleMarker::new("를", MarkerPosition::After).with_alternatives(["을"]),
    )
    .with_marker(
        SemanticRole::Destination,
        RoleMarker::new("에", MarkerPosition::After),
    )
    .with_marker(
        SemanticRole::Source,
        RoleMarker::new("에서", MarkerPosition::After),
    )
    .with_marker(
        SemanticRole::Content,
        RoleMarker::new("로", MarkerPosition::After).with_alternatives(["으로"]),
    )
    .with_structure(StructureSurfaces {
        event_prefix: strings(&["때"]),
        event_position: Some(MarkerPosition::After),
        connectors: strings(&["그리고", "그다음"]),
        conditional: strings(&["만약"]),
        conditional_else: strings(&["아니면"]),
        loop_keyword: strings(&["반복"]),
        loop_unit: strings(&["번"]),
    })
}

/// Turkish: SOV, case suffixes with vowel-harmony variants.
#[must_use]
pub fn turkish() -> LanguageProfile {
    LanguageProfile::new(
        "tr",
        "Türkçe",
        WordOrder::Sov,
        MarkingStrategy::Suffix,
        BoundaryStrategy::Suffix,
    )
    .with_command("toggle", ["değiştir"])
    .with_command("add", ["ekle"])
    .with_command("remove", ["kaldır"])
    .with_command("set", ["ayarla"])
    .with_command("show", ["göster"])
    .with_command("hide", ["gizle"])
    .with_command("put", ["yerleştir"])
    .with_command("send", ["gönder"])
    .with_command("wait", ["bekle"])
    .with_command("log", ["kaydet"])
    .with_command("increment", ["artır"])
    .with_command("decrement", ["azalt"])
    .with_command("fetch", ["getir"])
    .with_marker(
        SemanticRole::Patient,
        RoleMarker::new("i", MarkerPosition::After)
            .with_alternatives(["ı", "u", "ü", "yi", "yı", "yu", "yü"]),
    )
    .with_marker(
        SemanticRole::Destination,
        RoleMarker::new("e", MarkerPosition::After).with_alternatives(["a", "ye", "ya"]),
    )
    .with_marker(
        SemanticRole::Source,
        RoleMarker::new("den", MarkerPosition::After).with_alternatives(["dan", "ten", "tan"]),
    )
    .with_marker(
        SemanticRole::Content,
        RoleMarker::new("olarak", MarkerPosition::After),
    )
    .with_structure(StructureSurfaces {
        event_prefix: strings(&["zaman"]),
        event_position: Some(MarkerPosition::After),
        connectors: strings(&["sonra"]),
        conditional: strings(&["eğer"]),
        conditional_else: strings(&["yoksa"]),
        loop_keyword: strings(&["tekrarla"]),
        loop_unit: strings(&["kez"]),
    })
}

/// Chinese: SVO, prepositions, no word spacing.
#[must_use]
pub fn chinese() -> LanguageProfile {
    LanguageProfile::new(
        "zh",
        "中文",
        WordOrder::Svo,
        MarkingStrategy::Preposition,
        BoundaryStrategy::Character,
    )
    .with_command("toggle", ["切换"])
    .with_command("add", ["添加"])
    .with_command("remove", ["移除"])
    .with_command("set", ["设置"])
    .with_command("show", ["显示"])
    .with_command("hide", ["隐藏"])
    .with_command("put", ["放置"])
    .with_command("send", ["发送"])
    .with_command("wait", ["等待"])
    .with_command("log", ["记录"])
    .with_command("increment", ["增加"])
    .with_command("decrement", ["减少"])
    .with_command("fetch", ["获取"])
    .with_marker(
        SemanticRole::Destination,
        RoleMarker::new("在", MarkerPosition::Before).with_alternatives(["到"]),
    )
    .with_marker(
        SemanticRole::Content,
        RoleMarker::new("为", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Source,
        RoleMarker::new("从", MarkerPosition::Before),
    )
    .with_marker(
        SemanticRole::Style,
        RoleMarker::new("以", MarkerPosition::Before),
    )
    .with_structure(StructureSurfaces {
        event_prefix: strings(&["当"]),
        event_position: Some(MarkerPosition::Before),
        connectors: strings(&["然后"]),
        conditional: strings(&["如果"]),
        conditional_else: strings(&["否则"]),
        loop_keyword: strings(&["重复"]),
        loop_unit: strings(&["次"]),
    })
}

/// Every sample profile.
#[must_use]
pub fn all() -> Vec<LanguageProfile> {
    vec![
        english(),
        spanish(),
        japanese(),
        korean(),
        turkish(),
        chinese(),
    ]
}

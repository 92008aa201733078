//! Hand-authored reference corpus: aviation law articles grouped by
//! category, with declared cross-references.
//!
//! Pure data. Nothing in this file has behavior.

use crate::model::article::{Article, Category};

pub(super) const CATEGORIES: &[Category] = &[
    Category {
        id: "license",
        name: "資格・技能証明",
        color: "#3b82f6",
        articles: &[
            Article {
                id: "law2",
                law: "航空法",
                citation: "第2条",
                title: "定義",
                summary: "「航空運送事業」＝他人の需要に応じ、航空機を使用して有償で旅客又は貨物を運送する事業。「国際航空運送事業」＝本邦内と本邦外の地点間又は本邦外の各地間で行う航空運送事業。",
                official_text: None,
                reference_url: Some("https://elaws.e-gov.go.jp/document?lawid=327AC0000000231"),
                keywords: &["航空運送事業", "国際航空運送事業", "有償", "旅客", "貨物"],
                related_to: &["law100", "law72", "law77"],
            },
            Article {
                id: "law28",
                law: "航空法",
                citation: "第28条",
                title: "業務範囲",
                summary: "技能証明（航空機に乗り組んで運航を行う者）及び第31条第1項の航空身体検査証明を有するものでなければ、業務範囲の欄に掲げる行為を行ってはならない。",
                official_text: None,
                reference_url: None,
                keywords: &["技能証明", "航空身体検査証明", "業務範囲"],
                related_to: &["law29", "law31", "law67", "law149"],
            },
            Article {
                id: "law29",
                law: "航空法",
                citation: "第29条",
                title: "技能証明の試験",
                summary: "国土交通大臣は技能証明のため試験を行う。試験は学科試験及び実地試験。学科試験合格者でなければ実地試験を受けられない。指定養成施設修了者は試験の全部又は一部を免除可。",
                official_text: None,
                reference_url: None,
                keywords: &["学科試験", "実地試験", "技能証明", "指定養成施設"],
                related_to: &["law28", "law72"],
            },
            Article {
                id: "law31",
                law: "航空法",
                citation: "第31条第1項",
                title: "航空身体検査証明",
                summary: "航空業務に従事するには航空身体検査証明が必要。身体検査に適合の状態での受審が必要であり、不適合の状態では技能審査を受けることが出来ない。",
                official_text: None,
                reference_url: None,
                keywords: &["航空身体検査証明", "身体検査", "乗員健康管理医"],
                related_to: &["law28", "law67"],
            },
            Article {
                id: "law67",
                law: "航空法",
                citation: "第67条",
                title: "携帯する書類",
                summary: "航空従事者は航空業務を行う場合、技能証明書を携帯しなければならない。航空機に乗り組む場合は航空身体検査証明書も携帯。",
                official_text: Some("航空機乗組員は、航空業務に従事する場合には、技能証明書及び航空身体検査証明書を携帯しなければならない。航空機乗組員以外の航空従事者は、航空業務に従事する場合には、技能証明書を携帯しなければならない。"),
                reference_url: None,
                keywords: &["技能証明書", "航空身体検査証明書", "携帯"],
                related_to: &["law28", "law31", "om5710"],
            },
            Article {
                id: "law72",
                law: "航空法",
                citation: "第72条第1項",
                title: "機長の認定",
                summary: "国土交通大臣による知識及び能力の認定を受けなければ、航空運送事業の用に供する航空機には機長として乗り組んではならない。",
                official_text: None,
                reference_url: None,
                keywords: &["機長認定", "知識及び能力", "航空運送事業"],
                related_to: &["law2", "law29", "rule163"],
            },
            Article {
                id: "law149",
                law: "航空法",
                citation: "第149条",
                title: "罰則",
                summary: "業務範囲を超えて操縦を行った者等は、1年以下の懲役又は30万円以下の罰金。航空従事者への罰としては最も重い。偽りの手段で航空身体検査証明書の交付を受けた者も同様。",
                official_text: None,
                reference_url: None,
                keywords: &["懲役1年", "罰金30万円", "業務範囲違反", "最重罰"],
                related_to: &["law28"],
            },
        ],
    },
    Category {
        id: "captain",
        name: "機長の責務・権限",
        color: "#ef4444",
        articles: &[
            Article {
                id: "law73",
                law: "航空法",
                citation: "第73条",
                title: "機長の指揮監督権",
                summary: "機長は、当該航空機に乗り組んでその職務を行う者を指揮監督する。航空法上の「指揮」という文言はこれと施行規則163条の2点のみ。",
                official_text: Some("機長は、当該航空機に乗り組んでその職務を行う者を指揮監督する。"),
                reference_url: None,
                keywords: &["指揮監督", "乗組員", "職務"],
                related_to: &["rule163", "law73_4", "law74"],
            },
            Article {
                id: "law71_2",
                law: "航空法",
                citation: "第71条の2",
                title: "見張りの義務",
                summary: "航空機の操縦を行っている者の見張り義務。定期運送用操縦士に限らず、航空機の操縦を行っている者が対象。",
                official_text: Some("航空機の操縦を行つている者は、航空機の航行中は、第九十六条第一項の規定による国土交通大臣の指示に従つている航行であるとないとにかかわらず、当該航空機外の物件を視認できない気象状態の下にある場合を除き、他の航空機その他の物件と衝突しないように見張りをしなければならない。"),
                reference_url: None,
                keywords: &["見張り義務", "操縦者"],
                related_to: &["law76"],
            },
            Article {
                id: "law73_2",
                law: "航空法",
                citation: "第73条の2",
                title: "出発前の確認",
                summary: "機長は、国土交通省令で定めるところにより、出発前に航空機の整備状況、気象情報、航空情報、燃料・オイル搭載量、重量・重心位置等を確認しなければならない。",
                official_text: None,
                reference_url: None,
                keywords: &["出発前確認", "整備状況", "気象情報", "航空情報", "燃料", "重量・重心位置"],
                related_to: &["law73", "law99", "rule175", "om2_1_3_10"],
            },
            Article {
                id: "law73_4",
                law: "航空法",
                citation: "第73条の4",
                title: "安全阻害行為等の措置",
                summary: "機長は安全阻害行為等を抑止するための措置をとる権限があり、「拘束」したり「降機」させることができる。禁止命令対象8行為に対しては行為を止めるよう「命令」できる。",
                official_text: None,
                reference_url: None,
                keywords: &["安全阻害行為", "拘束", "降機", "命令", "禁止命令"],
                related_to: &["law73", "law74"],
            },
            Article {
                id: "law74",
                law: "航空法",
                citation: "第74条",
                title: "旅客への命令権",
                summary: "機長は、航空機又は旅客の危難が生じた場合又は危難が生ずるおそれがあると認める場合は、旅客に対し避難の方法その他安全のため必要な事項について命令できる。SBS点灯も法的にはこの条文に基づく命令。",
                official_text: None,
                reference_url: None,
                keywords: &["旅客命令権", "危難", "避難", "Seat Belt Sign"],
                related_to: &["law73", "law73_4"],
            },
            Article {
                id: "law76",
                law: "航空法",
                citation: "第76条",
                title: "報告の義務",
                summary: "機長の「報告の義務」。航空法に明記されている「義務」は、見張り義務（第71条の2）と報告の義務（第76条）の2つ。報告の義務は機長が対象。",
                official_text: None,
                reference_url: None,
                keywords: &["報告義務", "機長"],
                related_to: &["law71_2"],
            },
            Article {
                id: "law77",
                law: "航空法",
                citation: "第77条",
                title: "運航管理者",
                summary: "航空運送事業の用に供する航空機は、運航管理者の承認を受けなければ出発し又は飛行計画を変更してはならない。出発の可否は機長が決めるが、運航管理者の承認も必要。",
                official_text: None,
                reference_url: None,
                keywords: &["運航管理者", "承認", "出発", "飛行計画変更"],
                related_to: &["law2", "law73_2", "law100"],
            },
        ],
    },
    Category {
        id: "safety",
        name: "安全・危険物",
        color: "#f59e0b",
        articles: &[
            Article {
                id: "law86_2",
                law: "航空法",
                citation: "第86条の2",
                title: "危険物の取扱い",
                summary: "航空運送事業者は危険物の輸送・持ち込みを拒絶し、取卸しを要求できる。自ら取り卸せるのは託送人又は所持人がその場に居合わせない場合に限る。国土交通大臣は航空運送事業者に措置を命ずることができる。",
                official_text: None,
                reference_url: None,
                keywords: &["危険物", "輸送拒絶", "取卸し", "持ち込み拒絶"],
                related_to: &["law73_4"],
            },
            Article {
                id: "law99",
                law: "航空法",
                citation: "第99条",
                title: "航空情報の提供",
                summary: "国土交通大臣が提供する航空情報。普段確認しているNOTAMと法的に要求される航空情報の確認がどのような関係にあるか理解が必要。",
                official_text: None,
                reference_url: None,
                keywords: &["航空情報", "NOTAM", "国土交通大臣"],
                related_to: &["law73_2", "aip"],
            },
            Article {
                id: "law100",
                law: "航空法",
                citation: "第100条",
                title: "航空運送事業の許可",
                summary: "航空機に有償で旅客や貨物を載せる航空会社を経営しようとする場合、事業開始の前に国土交通大臣の許可を受けなければならない。",
                official_text: None,
                reference_url: None,
                keywords: &["事業許可", "国土交通大臣"],
                related_to: &["law2", "law77"],
            },
        ],
    },
    Category {
        id: "rules",
        name: "施行規則",
        color: "#8b5cf6",
        articles: &[
            Article {
                id: "rule_bt2",
                law: "航空法施行規則",
                citation: "別表第二",
                title: "飛行時間の定義",
                summary: "定期運送用操縦士の資格に必要な飛行時間の定義。飛行日誌記入要領に基づき記録。",
                official_text: None,
                reference_url: None,
                keywords: &["飛行時間", "飛行日誌"],
                related_to: &["rule44"],
            },
            Article {
                id: "rule44",
                law: "航空法施行規則",
                citation: "第44条",
                title: "飛行日誌の証明方法",
                summary: "飛行記録は航空機の種類ごとに飛行日誌を別にして記録。青又は黒のインク又はボールペンを使用。修正液は使用不可。副操縦士は機長の証明を受ける。",
                official_text: None,
                reference_url: None,
                keywords: &["飛行日誌", "青又は黒", "修正液不可", "機長証明"],
                related_to: &["rule_bt2"],
            },
            Article {
                id: "rule163",
                law: "航空法施行規則",
                citation: "第163条第2項",
                title: "機長の知識及び能力",
                summary: "法第72条第1項の国土交通省令で定める知識及び能力。「ハ」＝航空機乗組員及び客室乗務員に対する指揮監督。",
                official_text: None,
                reference_url: None,
                keywords: &["知識及び能力", "指揮監督", "客室乗務員"],
                related_to: &["law72", "law73"],
            },
            Article {
                id: "rule175",
                law: "航空法施行規則",
                citation: "第164条の16",
                title: "燃料搭載基準",
                summary: "タービン発動機装備の飛行機でIFRにより飛行し代替空港を飛行計画に表示するもの：着陸地まで+代替空港まで+上空450mで30分待機+不測の事態の燃料。発動機不作動/与圧喪失の場合は15分待機。",
                official_text: None,
                reference_url: None,
                keywords: &["燃料搭載", "450m", "30分", "15分", "代替空港", "不測の事態"],
                related_to: &["law73_2"],
            },
            Article {
                id: "rule189",
                law: "航空法施行規則",
                citation: "第189条",
                title: "空港等付近の航行方法",
                summary: "計器飛行方式により着陸しようとする場合の復行条件：①進入限界高度より高い特定地点で気象条件未満、②進入限界高度以下で目視物標の視認・識別による位置確認不能。",
                official_text: None,
                reference_url: None,
                keywords: &["復行", "進入限界高度", "目視物標", "気象条件", "ILS"],
                related_to: &["law73_2"],
            },
        ],
    },
    Category {
        id: "reference",
        name: "AIP・基準等",
        color: "#10b981",
        articles: &[
            Article {
                id: "aip",
                law: "AIP",
                citation: "GEN 1.5",
                title: "RNAV航行の規定",
                summary: "航法精度が指定された経路又は空域におけるRNAV航行には国土交通大臣の許可が必要。RNP AR APCHは方式毎に許可。RNP10は広域航法システム2式が必要。",
                official_text: None,
                reference_url: Some("https://aisjapan.mlit.go.jp/"),
                keywords: &["RNAV", "RNP AR APCH", "RNP10", "広域航法システム", "許可"],
                related_to: &["law99"],
            },
            Article {
                id: "aim_j",
                law: "AIM-J",
                citation: "11-20",
                title: "航空情報サーキュラー（AIC）",
                summary: "運航の安全、飛行方法・技術、行政又は法律上の事項についての説明的、助言的性格の情報。暦年一連番号、チェックリスト年1回発行。",
                official_text: None,
                reference_url: None,
                keywords: &["AIC", "説明的", "助言的", "年1回", "チェックリスト"],
                related_to: &["law99"],
            },
        ],
    },
    Category {
        id: "company",
        name: "社内規定（OM等）",
        color: "#06b6d4",
        articles: &[
            Article {
                id: "om_sup98",
                law: "OM Supplement",
                citation: "9.8",
                title: "飛行規程の代用",
                summary: "JALの航空機には飛行規程は搭載されていない。運航規程第3巻とAOM、MEL/CDL Manualをもって代用。",
                official_text: None,
                reference_url: None,
                keywords: &["飛行規程代用", "運航規程第3巻", "AOM", "MEL/CDL"],
                related_to: &["law73_2"],
            },
            Article {
                id: "om2_1_3_10",
                law: "OM Supplement",
                citation: "2.1.3.10",
                title: "機体の整備状況の確認",
                summary: "運航乗務員は①確認主任者からBriefingを受ける、②機体の外部点検、③搭載用航空日誌等の整備記録を点検する。",
                official_text: None,
                reference_url: None,
                keywords: &["整備状況", "外部点検", "確認主任者", "Briefing"],
                related_to: &["law73_2"],
            },
            Article {
                id: "om5710",
                law: "OM",
                citation: "5.7.10",
                title: "乗務に必要な携帯品",
                summary: "航空法第67条の技能証明書・航空身体検査証明書に加え、社内で定める携帯品。",
                official_text: None,
                reference_url: None,
                keywords: &["携帯品", "技能証明書"],
                related_to: &["law67"],
            },
            Article {
                id: "om_sup2ii",
                law: "OM Supplement",
                citation: "2-II, S-5-13",
                title: "Multi-Crew Co-operation (MCC)",
                summary: "PICはPF/PMにかかわらず運航全般のマネジメント及びチームによる意思決定を遂行。PFとPMの業務を明確にし、PFが操縦操作に集中できるよう業務配分。常に相互モニタリング。",
                official_text: None,
                reference_url: None,
                keywords: &["MCC", "PIC", "PF", "PM", "チーム意思決定", "モニタリング"],
                related_to: &["law73", "rule163"],
            },
        ],
    },
];

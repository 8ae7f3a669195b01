pub const FORM_PAGE_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>SARA - Novo Ponto</title>
  <style>
    body {
      margin: 0;
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      background: url("/assets/fundos/fundo_form.png") center / cover fixed;
    }
    .container {
      max-width: 720px;
      margin: 2rem auto;
      padding: 1.5rem;
      border-radius: 1rem;
      background: rgba(255, 255, 255, 0.9);
    }
    label { display: block; margin: .75rem 0 .25rem; font-weight: 600; }
    input, select { width: 100%; padding: .5rem; box-sizing: border-box; }
    button { margin-top: 1rem; padding: .5rem 1rem; cursor: pointer; }
    .notice { padding: .75rem 1rem; margin-top: .75rem; border-radius: .5rem; }
    .info { background: #e8f1fd; color: #0b4a8b; }
    .success { background: #e6f6ea; color: #1b6b33; }
    .warning { background: #fff4ce; color: #6b5200; }
    .error { background: #fde8e8; color: #8b1111; }
  </style>
</head>

<body>
  <div class="container">
    <h1>Cadastro de Ponto de Descarte Irregular</h1>

    <h3>Dados do ponto</h3>
    <label for="category">Categoria do ponto identificado</label>
    <select id="category"></select>
    <label for="name">Nome do ponto (descrição curta)</label>
    <input id="name" type="text" />
    <label for="classification">Classificação PNRS (opcional)</label>
    <input id="classification" type="text" />

    <h3>Localização</h3>
    <button id="locate">Solicitar localização do navegador</button>
    <div id="location-status" class="notice"></div>
    <div id="coords" class="notice"></div>

    <hr />
    <button id="submit" disabled>Finalizar cadastro</button>
    <div id="submit-status" class="notice" style="display: none"></div>
  </div>

  <script>
    (function () {
      const locate = document.getElementById('locate');
      const submit = document.getElementById('submit');
      const locationStatus = document.getElementById('location-status');
      const coordsBox = document.getElementById('coords');
      const submitStatus = document.getElementById('submit-status');

      function show(el, kind, text) {
        el.className = 'notice ' + kind;
        el.textContent = text;
        el.style.display = text ? 'block' : 'none';
      }

      function showCoords(state) {
        if (state.latitude !== undefined && state.latitude !== null) {
          show(coordsBox, 'info',
            'Coordenadas atuais: lat=' + state.latitude.toFixed(6) + ', long=' + state.longitude.toFixed(6));
          submit.disabled = false;
        } else {
          show(coordsBox, 'warning',
            "Nenhuma coordenada capturada ainda. Clique em 'Solicitar localização do navegador' e permita o acesso.");
          submit.disabled = true;
        }
      }

      function report(payload) {
        return fetch('/api/location/report', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        }).catch(() => {});
      }

      function askBrowser() {
        if (!navigator.geolocation) {
          report({ error: 'Geolocation API unavailable' });
          return;
        }
        navigator.geolocation.getCurrentPosition(
          pos => report({
            coords: { latitude: pos.coords.latitude, longitude: pos.coords.longitude },
            timestamp: pos.timestamp,
          }),
          err => report(err.code === err.PERMISSION_DENIED
            ? { permission: 'denied', error: err.message }
            : { error: err.message }),
          { enableHighAccuracy: true, timeout: 8000 },
        );
      }

      locate.addEventListener('click', async () => {
        locate.disabled = true;
        submit.disabled = true;
        showCoords({});
        await fetch('/api/location/request', { method: 'POST' });
        show(locationStatus, 'info',
          'Aguardando resposta do navegador... verifique o pedido de permissão de localização.');

        const waiting = fetch('/api/location/await');
        askBrowser();
        const result = await (await waiting).json();

        show(locationStatus, result.status === 'resolved' ? 'success' : 'error', result.message || result.error);
        showCoords(result);
        locate.disabled = false;
      });

      submit.addEventListener('click', async () => {
        const payload = {
          category: Number(document.getElementById('category').value),
          name: document.getElementById('name').value,
          classification_code: document.getElementById('classification').value,
        };
        const response = await fetch('/api/points', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        });
        const body = await response.json();
        show(submitStatus, response.ok ? 'success' : 'error', response.ok ? body.message : body.error);
      });

      async function init() {
        const data = await (await fetch('/api/categories')).json();
        const select = document.getElementById('category');
        for (const option of data.options) {
          const el = document.createElement('option');
          el.value = option.code;
          el.textContent = option.text;
          select.appendChild(el);
        }
        const state = await (await fetch('/api/location')).json();
        show(locationStatus, 'info', '');
        showCoords(state);
      }

      init();
    })();
  </script>
</body>

</html>
"#;
